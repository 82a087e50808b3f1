use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("cannot open directory '{}' for reading", .path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no source files for target '{name}'")]
    EmptySourceSet { name: String },

    #[error("target name must not be empty")]
    EmptyOutputName,

    #[error("cannot open '{}' for writing", .path.display())]
    FileUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("header template: {0}")]
    Template(#[from] tinytemplate::error::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
