//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - validates the schema and runs lints
//! - [`LowerPhase`] - transforms the schema to Application IR

mod lower;
mod validate;

pub use lower::LowerPhase;
pub use validate::{
    DuplicateMethodLint, EmptyFieldsLint, Lint, LintInfo, UnknownFieldTypeLint,
    UnsupportedMethodLint, ValidatePhase,
};
