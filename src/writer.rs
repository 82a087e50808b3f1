use anyhow::{Context, Result};
use makefile_gen::GenError;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Destination opened up front, written once the Makefile is rendered.
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    file: File,
}

impl OutputFile {
    pub fn create(path: &Path) -> Result<Self, GenError> {
        let unwritable = |source| GenError::FileUnwritable {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(unwritable)?;
        }
        let file = File::create(path).map_err(unwritable)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn write(mut self, content: &str) -> Result<()> {
        self.file
            .write_all(content.as_bytes())
            .and_then(|_| self.file.flush())
            .with_context(|| format!("Failed writing {}", self.path.display()))?;
        info!("Generated {}", self.path.display());
        Ok(())
    }
}
