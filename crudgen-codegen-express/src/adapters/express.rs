//! Express HTTP layer adapter.

use crudgen_codegen::{
    builder::CodeFragment,
    ir::{Handler, HandlerKind},
    sql,
};

use super::{Dependency, sqlite::DB_BINDING};
use crate::ast::{JsObject, Require, RouteHandler, string_literal, template_text};

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Default)]
pub struct ExpressAdapter;

impl ExpressAdapter {
    pub fn new() -> Self {
        Self
    }

    pub fn name(&self) -> &'static str {
        "express"
    }

    pub fn dependencies(&self) -> Vec<Dependency> {
        vec![Dependency::new("express", "^4.19.2")]
    }

    pub fn requires(&self) -> Vec<Require> {
        vec![Require::new("express", "express")]
    }

    /// App construction and JSON body parsing.
    pub fn app_setup(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::line("const app = express();"),
            CodeFragment::line("app.use(express.json());"),
        ]
    }

    pub fn port(&self) -> CodeFragment {
        CodeFragment::line(format!(
            "const PORT = process.env.PORT || {};",
            DEFAULT_PORT
        ))
    }

    /// `app.listen(PORT, ...)` with the startup banner.
    pub fn listen(&self, app_name: &str) -> CodeFragment {
        CodeFragment::block(
            "app.listen(PORT, () => {",
            vec![CodeFragment::line(format!(
                "console.log(`{} server running on port ${{PORT}}`);",
                template_text(app_name)
            ))],
            "});",
        )
    }

    /// Route handler for one IR handler.
    ///
    /// Database failures are answered with `500 { error }`.
    pub fn handler(&self, handler: &Handler) -> RouteHandler {
        let route = RouteHandler::new(handler.method, handler.path.as_str());
        let table = handler.table();

        let route = match handler.kind {
            HandlerKind::ListAll => route
                .statement(format!(
                    "const rows = await {}.all({});",
                    DB_BINDING,
                    string_literal(&sql::select_all(table))
                ))
                .statement("res.json(rows);"),
            HandlerKind::Insert => route
                .statement("const keys = Object.keys(req.body);")
                .statement("const values = Object.values(req.body);")
                .statement("const placeholders = keys.map(() => \"?\").join(\", \");")
                .statement(format!(
                    "await {}.run(`{} (${{keys.join(\", \")}}) VALUES (${{placeholders}})`, values);",
                    DB_BINDING,
                    template_text(&sql::insert_into(table))
                ))
                .statement(Self::acknowledge(&handler.model, "created")),
            HandlerKind::DeleteById => route
                .statement(format!(
                    "await {}.run({}, req.params.id);",
                    DB_BINDING,
                    string_literal(&sql::delete_by_id(table))
                ))
                .statement(Self::acknowledge(&handler.model, "deleted")),
        };

        route.catch(["res.status(500).json({ error: err.message });"])
    }

    fn acknowledge(model: &str, action: &str) -> String {
        let body = JsObject::new().field(
            "message",
            string_literal(&format!("{} {}", model, action)),
        );
        format!("res.json({});", body.inline())
    }
}

#[cfg(test)]
mod tests {
    use crudgen_codegen::builder::CodeBuilder;
    use crudgen_schema::HttpMethod;

    use super::*;

    fn render(handler: &Handler) -> String {
        let mut builder = CodeBuilder::javascript();
        builder.emit(&ExpressAdapter.handler(handler));
        builder.build()
    }

    #[test]
    fn test_list_handler() {
        let code = render(&Handler::new("Note", HttpMethod::Get));

        assert!(code.starts_with("app.get(\"/api/note\", async (req, res) => {\n"));
        assert!(code.contains("const rows = await db.all(\"SELECT * FROM Note\");"));
        assert!(code.contains("res.status(500).json({ error: err.message });"));
    }

    #[test]
    fn test_insert_handler() {
        let code = render(&Handler::new("BlogPost", HttpMethod::Post));

        assert!(code.starts_with("app.post(\"/api/blogpost\""));
        assert!(code.contains(
            "await db.run(`INSERT INTO BlogPost (${keys.join(\", \")}) VALUES (${placeholders})`, values);"
        ));
        assert!(code.contains("res.json({ message: \"BlogPost created\" });"));
    }

    #[test]
    fn test_delete_handler() {
        let code = render(&Handler::new("Note", HttpMethod::Delete));

        assert!(code.starts_with("app.delete(\"/api/note/:id\""));
        assert!(code.contains("await db.run(\"DELETE FROM Note WHERE id = ?\", req.params.id);"));
        assert!(code.contains("res.json({ message: \"Note deleted\" });"));
    }

    #[test]
    fn test_listen_banner_escapes_template() {
        let mut builder = CodeBuilder::javascript();
        builder.apply_fragment(ExpressAdapter.listen("My`App"));

        assert!(
            builder
                .build()
                .contains("console.log(`My\\`App server running on port ${PORT}`);")
        );
    }
}
