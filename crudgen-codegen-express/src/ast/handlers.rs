//! Express route handler builder.

use crudgen_codegen::builder::{CodeFragment, Renderable};
use crudgen_schema::HttpMethod;

use super::string_literal;

/// `app.<method>("<path>", async (req, res) => { ... });`
///
/// With a catch body set, the handler body is wrapped in `try/catch (err)`.
#[derive(Debug, Clone)]
pub struct RouteHandler {
    app: String,
    method: HttpMethod,
    path: String,
    body: Vec<CodeFragment>,
    catch: Vec<CodeFragment>,
}

impl RouteHandler {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            app: "app".to_string(),
            method,
            path: path.into(),
            body: Vec::new(),
            catch: Vec::new(),
        }
    }

    pub fn statement(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Statements run when the body throws; `err` is in scope.
    pub fn catch(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.catch
            .extend(lines.into_iter().map(CodeFragment::line));
        self
    }

    fn header(&self) -> String {
        format!(
            "{}.{}({}, async (req, res) => {{",
            self.app,
            self.method.as_str().to_ascii_lowercase(),
            string_literal(&self.path)
        )
    }
}

impl Renderable for RouteHandler {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = if self.catch.is_empty() {
            self.body.clone()
        } else {
            vec![
                CodeFragment::Block {
                    header: "try {".to_string(),
                    body: self.body.clone(),
                    close: None,
                },
                CodeFragment::block("} catch (err) {", self.catch.clone(), "}"),
            ]
        };

        vec![CodeFragment::block(self.header(), body, "});")]
    }
}
