//! `server.js`: the HTTP layer.

use crudgen_codegen::{
    builder::{CodeFragment, Renderable},
    ir::Handler,
};
use crudgen_core::GeneratedFile;

use super::{DB_MODULE, INIT_DB, header};
use crate::{
    CodeFile,
    adapters::ExpressAdapter,
    ast::{AsyncIife, Require},
};

/// Express server with one route handler per IR handler.
pub struct ServerJs<'a> {
    app_name: &'a str,
    handlers: &'a [Handler],
    adapter: ExpressAdapter,
}

impl<'a> ServerJs<'a> {
    pub fn new(app_name: &'a str, handlers: &'a [Handler]) -> Self {
        Self {
            app_name,
            handlers,
            adapter: ExpressAdapter::new(),
        }
    }

    fn startup(&self) -> AsyncIife {
        let mut startup = AsyncIife::new()
            .statement(format!("const db = await {}();", INIT_DB))
            .blank();

        for handler in self.handlers {
            let route = self.adapter.handler(handler);
            startup = startup
                .fragments(route.to_fragments())
                .blank();
        }

        startup.fragments([self.adapter.listen(self.app_name)])
    }
}

impl GeneratedFile for ServerJs<'_> {
    fn filename(&self) -> &'static str {
        "server.js"
    }

    fn render(&self) -> String {
        CodeFile::new()
            .header(header(self.app_name))
            .requires(self.adapter.requires())
            .require(Require::named(DB_MODULE, [INIT_DB]))
            .add(CodeFragment::Sequence(self.adapter.app_setup()))
            .add(self.adapter.port())
            .add(self.startup())
            .render()
    }
}
