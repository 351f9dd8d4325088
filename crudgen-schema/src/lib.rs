//! Schema intake for the crudgen backend generator.
//!
//! A [`Schema`] describes the models (storage tables) and routes (HTTP
//! surfaces) of the application to generate. It can be built in code or
//! parsed from JSON or TOML, and must pass [`Schema::validate`] before
//! anything is written.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod parse;
mod route;
mod schema;
mod validate;

pub use crudgen_core::FieldType;
pub use error::{Result, SchemaError, SourceContext};
pub use parse::SchemaFormat;
pub use route::{HttpMethod, Route};
pub use schema::{Model, Schema};
pub use validate::{is_sql_keyword, validate_identifier};
