mod error;
mod lister;
mod model;
mod render;

pub use crate::error::{GenError, Result};
pub use crate::lister::{SourceListing, list_sources, matches_suffix};
pub use crate::model::{DEFAULT_OUTPUT, ProjectSettings, SOURCE_SUFFIX, Sources, Target, TargetKind};
pub use crate::render::render;

use std::path::Path;
use tracing::{debug, info};

/// Ordered targets of one generation session. Targets are only ever appended.
#[derive(Debug, Default)]
pub struct Project {
    targets: Vec<Target>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Scan `dir` for sources with the configured suffix and append a target for them.
    ///
    /// A scan with no match is rejected with [`GenError::EmptySourceSet`] instead of
    /// producing an empty `SRC<i>` line.
    pub fn append_from_directory(
        &mut self,
        settings: &ProjectSettings,
        dir: Option<&Path>,
        kind: TargetKind,
        output_name: &str,
    ) -> Result<&Target> {
        check_output_name(output_name)?;
        let files = list_sources(dir, &settings.source_suffix)?.collect::<Result<Vec<_>>>()?;
        self.append_from_listed(kind, output_name, files)
    }

    /// Append a target for files already found by [`list_sources`].
    pub fn append_from_listed(
        &mut self,
        kind: TargetKind,
        output_name: &str,
        files: Vec<String>,
    ) -> Result<&Target> {
        check_output_name(output_name)?;
        if files.is_empty() {
            return Err(GenError::EmptySourceSet {
                name: output_name.to_string(),
            });
        }
        debug!("Found {} source(s) for {}", files.len(), output_name);
        Ok(self.push(kind, Sources::Listed(files), output_name))
    }

    /// Append a target whose sources were typed in as one Makefile list.
    pub fn append_from_manual_list(
        &mut self,
        kind: TargetKind,
        output_name: &str,
        raw_sources: &str,
    ) -> Result<&Target> {
        check_output_name(output_name)?;
        let sources = Sources::Raw(raw_sources.to_string());
        if sources.is_empty() {
            return Err(GenError::EmptySourceSet {
                name: output_name.to_string(),
            });
        }
        Ok(self.push(kind, sources, output_name))
    }

    pub fn render(&self, settings: &ProjectSettings) -> Result<String> {
        render(settings, &self.targets)
    }

    fn push(&mut self, kind: TargetKind, sources: Sources, output_name: &str) -> &Target {
        let index = self.targets.len();
        self.targets
            .push(Target::new(index, kind, sources, output_name.to_string()));
        let target = &self.targets[index];
        info!("Added {} = {}", target.output_var(), output_name);
        target
    }
}

fn check_output_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GenError::EmptyOutputName);
    }
    Ok(())
}
