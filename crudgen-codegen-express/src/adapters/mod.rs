//! Framework adapters for the Express + SQLite target.
//!
//! Each adapter owns the framework-specific statements the file renderers
//! assemble: [`ExpressAdapter`] for the HTTP layer, [`SqliteAdapter`] for
//! the `sqlite`/`sqlite3` data layer.

mod express;
mod sqlite;

pub use self::{express::ExpressAdapter, sqlite::SqliteAdapter};

/// An npm dependency with name and version range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub version: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}
