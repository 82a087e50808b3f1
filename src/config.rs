use anyhow::{Context, Result, bail};
use makefile_gen::{ProjectSettings, TargetKind};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(tag = "from")]
pub enum TargetEntry {
    #[serde(rename = "directory")]
    Directory {
        #[serde(default)]
        path: Option<PathBuf>,
        #[serde(default)]
        library: bool,
        name: String,
    },
    #[serde(rename = "files")]
    Files {
        sources: String,
        #[serde(default)]
        library: bool,
        name: String,
    },
}

impl TargetEntry {
    pub fn kind(&self) -> TargetKind {
        match self {
            TargetEntry::Directory { library, .. } | TargetEntry::Files { library, .. } => {
                TargetKind::from_library_flag(*library)
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TargetEntry::Directory { name, .. } | TargetEntry::Files { name, .. } => name,
        }
    }
}

/// Answers file, lets a whole session run without prompting.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub settings: ProjectSettings,
    #[serde(default)]
    pub targets: Vec<TargetEntry>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.settings.source_suffix.trim().is_empty() {
            bail!("suffix must not be empty");
        }
        Ok(config)
    }
}
