//! SQLite data layer adapter using the `sqlite` promise wrapper over `sqlite3`.

use crudgen_codegen::{builder::CodeFragment, ir::Table, sql};

use super::Dependency;
use crate::ast::{JsObject, Require, string_literal};

/// Database file, created next to the generated `db.js`.
pub const DATABASE_FILE: &str = "database.sqlite";

/// Binding that holds the open database handle.
pub const DB_BINDING: &str = "db";

#[derive(Debug, Clone, Default)]
pub struct SqliteAdapter;

impl SqliteAdapter {
    pub fn new() -> Self {
        Self
    }

    pub fn name(&self) -> &'static str {
        "sqlite"
    }

    pub fn dependencies(&self) -> Vec<Dependency> {
        vec![
            Dependency::new("sqlite", "^5.1.1"),
            Dependency::new("sqlite3", "^5.1.7"),
        ]
    }

    pub fn requires(&self) -> Vec<Require> {
        vec![
            Require::new("path", "path"),
            Require::new("sqlite3", "sqlite3"),
            Require::named("sqlite", ["open"]),
        ]
    }

    /// `const db = await open({ ... });`
    pub fn open(&self) -> CodeFragment {
        JsObject::new()
            .field(
                "filename",
                format!("path.join(__dirname, {})", string_literal(DATABASE_FILE)),
            )
            .field("driver", "sqlite3.Database")
            .block(&format!("const {} = await open(", DB_BINDING), ");")
    }

    /// `await db.exec("CREATE TABLE IF NOT EXISTS ...");`
    pub fn create_table(&self, table: &Table) -> CodeFragment {
        CodeFragment::line(format!(
            "await {}.exec({});",
            DB_BINDING,
            string_literal(&sql::create_table(table))
        ))
    }
}

#[cfg(test)]
mod tests {
    use crudgen_codegen::{builder::CodeBuilder, ir::Column};
    use crudgen_core::ColumnType;

    use super::*;

    #[test]
    fn test_create_table_statement() {
        let table = Table {
            name: "Note".to_string(),
            columns: vec![Column {
                name: "id".to_string(),
                ty: ColumnType::Integer,
            }],
        };

        assert_eq!(
            SqliteAdapter.create_table(&table),
            CodeFragment::line(
                "await db.exec(\"CREATE TABLE IF NOT EXISTS Note (id INTEGER)\");"
            )
        );
    }

    #[test]
    fn test_open_uses_module_directory() {
        let mut builder = CodeBuilder::javascript();
        builder.apply_fragment(SqliteAdapter.open());

        assert_eq!(
            builder.build(),
            "const db = await open({\n  filename: path.join(__dirname, \"database.sqlite\"),\n  driver: sqlite3.Database,\n});\n"
        );
    }
}
