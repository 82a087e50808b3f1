use crate::error::{GenError, Result};
use std::fs::{self, DirEntry, ReadDir};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lazily yields the source files of one directory, in read order.
#[derive(Debug)]
pub struct SourceListing {
    entries: ReadDir,
    dir: Option<PathBuf>,
    suffix: String,
    failed: bool,
}

/// Open `dir` (current directory when `None`) for scanning.
///
/// Names are qualified with `dir` when one is given. Collect into
/// `Result<Vec<_>>` to get all names or the first error.
pub fn list_sources(dir: Option<&Path>, suffix: &str) -> Result<SourceListing> {
    let read_path = dir.unwrap_or(Path::new("."));
    let entries = fs::read_dir(read_path).map_err(|source| GenError::DirectoryUnavailable {
        path: read_path.to_path_buf(),
        source,
    })?;
    debug!("Scanning {} for *{}", read_path.display(), suffix);
    Ok(SourceListing {
        entries,
        dir: dir.map(Path::to_path_buf),
        suffix: suffix.to_string(),
        failed: false,
    })
}

/// Exact terminal suffix match; the bare suffix alone is not a file name.
/// An empty suffix matches nothing.
pub fn matches_suffix(name: &str, suffix: &str) -> bool {
    !suffix.is_empty() && name.len() > suffix.len() && name.ends_with(suffix)
}

impl SourceListing {
    fn unreadable(&self, source: io::Error) -> GenError {
        GenError::DirectoryUnavailable {
            path: self.dir.clone().unwrap_or_else(|| PathBuf::from(".")),
            source,
        }
    }

    /// `None` when the entry is not a source file.
    fn source_path(&self, entry: io::Result<DirEntry>) -> Option<Result<String>> {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => return Some(Err(self.unreadable(e))),
        };
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!("Skip non UTF-8 name {:?}", file_name);
            return None;
        };
        if !matches_suffix(name, &self.suffix) {
            return None;
        }
        match entry.file_type() {
            Ok(t) if t.is_dir() => return None,
            Ok(_) => {}
            Err(e) => return Some(Err(self.unreadable(e))),
        }
        Some(Ok(match &self.dir {
            Some(dir) => dir.join(name).to_string_lossy().into_owned(),
            None => name.to_string(),
        }))
    }
}

// An unreadable entry yields one error and ends the listing.
impl Iterator for SourceListing {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Result<String>> {
        if self.failed {
            return None;
        }
        while let Some(entry) = self.entries.next() {
            match self.source_path(entry) {
                Some(Err(e)) => {
                    self.failed = true;
                    return Some(Err(e));
                }
                Some(found) => return Some(found),
                None => continue,
            }
        }
        None
    }
}
