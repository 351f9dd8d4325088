//! `db.js`: the data layer.

use crudgen_codegen::ir::Table;
use crudgen_core::GeneratedFile;

use super::{INIT_DB, header};
use crate::{
    CodeFile,
    adapters::SqliteAdapter,
    ast::Fn,
};

/// Opens the SQLite database and creates one table per model.
pub struct DbJs<'a> {
    app_name: &'a str,
    tables: &'a [Table],
    adapter: SqliteAdapter,
}

impl<'a> DbJs<'a> {
    pub fn new(app_name: &'a str, tables: &'a [Table]) -> Self {
        Self {
            app_name,
            tables,
            adapter: SqliteAdapter::new(),
        }
    }

    fn init_fn(&self) -> Fn {
        let mut init = Fn::new(INIT_DB).async_().fragment(self.adapter.open()).blank();

        if !self.tables.is_empty() {
            for table in self.tables {
                init = init.fragment(self.adapter.create_table(table));
            }
            init = init.blank();
        }

        init.statement("return db;")
    }
}

impl GeneratedFile for DbJs<'_> {
    fn filename(&self) -> &'static str {
        "db.js"
    }

    fn render(&self) -> String {
        CodeFile::new()
            .header(header(self.app_name))
            .requires(self.adapter.requires())
            .add(self.init_fn())
            .export(INIT_DB)
            .render()
    }
}
