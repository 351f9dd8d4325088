use crudgen_core::GenerationError;
use crudgen_schema::SchemaError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for code generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a generation run: either the schema was rejected before
/// anything was written, or writing the output failed.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] Box<SchemaError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Generation(#[from] GenerationError),
}

impl Error {
    /// The schema error, if the schema was rejected.
    pub fn as_schema_error(&self) -> Option<&SchemaError> {
        match self {
            Self::Schema(err) => Some(&**err),
            Self::Generation(_) => None,
        }
    }
}
