//! Core utilities and types for the crudgen backend generator.
//!
//! This crate provides the leaf types shared by every other crate in the
//! workspace: declared field types and their storage mapping, generated
//! artifacts, and the file-system sink artifacts are written to.

mod artifact;
mod error;
mod sink;
mod type_mapper;

// Generated output
pub use artifact::{Artifact, FileRules, GeneratedFile, Overwrite, WriteResult};
pub use error::{GenerationError, Result};
// File-system collaborators
pub use sink::{FsSink, MemorySink, Sink};
// Fundamental types
pub use type_mapper::{ColumnType, FieldType, SqliteTypeMapper, TypeMapper};
