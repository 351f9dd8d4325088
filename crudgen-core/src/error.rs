use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for writing generated output.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// A fatal failure while writing generated output.
///
/// Every artifact is written as a single unit, so no partial output needs
/// to be cleaned up when one of these is returned.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerationError {
    #[error("failed to create directory '{}'", .path.display())]
    #[diagnostic(code(crudgen::create_dir))]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}'", .path.display())]
    #[diagnostic(
        code(crudgen::write_file),
        help("check that the output directory exists and is writable")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerationError {
    pub fn create_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// The path the failed operation targeted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::CreateDir { path, .. } | Self::Write { path, .. } => path,
        }
    }
}
