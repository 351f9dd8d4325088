//! Express + SQLite code generator for crudgen.
//!
//! Turns a [`Schema`] into a runnable Node.js backend: an
//! [Express](https://expressjs.com/) server with CRUD handlers over a SQLite
//! database opened through the `sqlite` promise wrapper.
//!
//! # Usage
//!
//! ```
//! use crudgen_schema::{Model, Route, Schema};
//!
//! let schema = Schema::new("NotesApp")
//!     .model(Model::new("Note").field("id", "number").field("title", "string"))
//!     .route(Route::new("Note", ["GET", "POST"]));
//!
//! let artifacts = crudgen_codegen_express::generate(schema).unwrap();
//!
//! assert_eq!(artifacts[0].filename(), "db.js");
//! assert!(artifacts[0]
//!     .content()
//!     .contains("CREATE TABLE IF NOT EXISTS Note (id INTEGER, title TEXT)"));
//! assert_eq!(artifacts[1].filename(), "server.js");
//! ```
//!
//! # Generated Output
//!
//! - `db.js` - `initDB()`, which opens `database.sqlite` and creates one table per model
//! - `server.js` - Express app with `GET`/`POST /api/<model>` and `DELETE /api/<model>/:id`
//! - `package.json` - optional, only created if missing

mod code_file;
mod generator;

pub mod adapters;
pub mod ast;
pub mod files;

use std::path::Path;

pub use adapters::{ExpressAdapter, SqliteAdapter};
pub use code_file::CodeFile;
use crudgen_codegen::pipeline::Pipeline;
pub use crudgen_codegen::{BackendCodegen, GenerateResult};
use crudgen_core::{Artifact, Sink};
use crudgen_schema::Schema;
pub use generator::Generator;

/// Validate `schema` and render its artifacts without writing anything.
///
/// # Errors
///
/// Returns [`crudgen_codegen::Error::Schema`] if the schema is invalid.
pub fn generate(schema: Schema) -> crudgen_codegen::Result<Vec<Artifact>> {
    let ctx = Pipeline::new().run(schema)?;
    Ok(Generator::from_context(ctx).artifacts())
}

/// Validate `schema` and write its artifacts to `<output_root>/<appName>`.
///
/// Nothing is written if validation fails.
pub fn generate_to(
    schema: Schema,
    sink: &mut dyn Sink,
    output_root: &Path,
) -> crudgen_codegen::Result<GenerateResult> {
    let ctx = Pipeline::new().run(schema)?;
    Ok(Generator::from_context(ctx).generate(sink, output_root)?)
}
