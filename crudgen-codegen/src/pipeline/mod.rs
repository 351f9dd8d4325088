//! Compilation pipeline for code generation.
//!
//! A [`Pipeline`] takes a parsed [`Schema`](crudgen_schema::Schema) through
//! explicit phases:
//!
//! - `validate`: structural checks (fatal) followed by lints (warnings only)
//! - `lower`: schema to [`AppIR`](crate::ir::AppIR)
//!
//! Every phase shares one [`CompilationContext`], which also collects the
//! diagnostics.
//!
//! # Example
//!
//! ```
//! use crudgen_codegen::pipeline::Pipeline;
//! use crudgen_schema::{Model, Route, Schema};
//!
//! let schema = Schema::new("NotesApp")
//!     .model(Model::new("Note").field("title", "string"))
//!     .route(Route::new("Note", ["GET", "PATCH"]));
//!
//! let mut ctx = Pipeline::new().run(schema).unwrap();
//!
//! // PATCH is ignored, with a warning
//! assert_eq!(ctx.warning_count(), 1);
//! assert_eq!(ctx.take_ir().handlers.len(), 1);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use runner::Pipeline;
