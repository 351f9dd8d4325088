//! Shared code generation engine for crudgen.
//!
//! This crate turns a validated [`Schema`](crudgen_schema::Schema) into the
//! target-neutral pieces every backend renders from.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`ir`] - Application IR (tables, columns, handler descriptors)
//! - [`sql`] - SQL statement synthesis
//! - [`pipeline`] - Validate and lower phases with diagnostics
//! - [`language`] - The [`BackendCodegen`] trait implemented by targets

pub mod builder;
mod error;
pub mod ir;
pub mod language;
pub mod pipeline;
pub mod sql;

pub use error::{Error, Result};
pub use language::{BackendCodegen, GenerateResult};
