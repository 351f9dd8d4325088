//! Function builders.

use crudgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for function declarations.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    is_async: bool,
    params: Vec<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_async: false,
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a statement to the body.
    pub fn statement(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a fragment to the body.
    pub fn fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    /// Add a blank line to the body.
    pub fn blank(mut self) -> Self {
        self.body.push(CodeFragment::Blank);
        self
    }

    fn signature(&self) -> String {
        let async_kw = if self.is_async { "async " } else { "" };
        format!(
            "{}function {}({}) {{",
            async_kw,
            self.name,
            self.params.join(", ")
        )
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            self.signature(),
            self.body.clone(),
            "}",
        )]
    }
}

/// An immediately invoked async arrow function, `(async () => { ... })();`.
#[derive(Debug, Clone, Default)]
pub struct AsyncIife {
    body: Vec<CodeFragment>,
}

impl AsyncIife {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statement(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    pub fn fragments(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    pub fn blank(mut self) -> Self {
        self.body.push(CodeFragment::Blank);
        self
    }
}

impl Renderable for AsyncIife {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            "(async () => {",
            self.body.clone(),
            "})();",
        )]
    }
}

#[cfg(test)]
mod tests {
    use crudgen_codegen::builder::CodeBuilder;

    use super::*;

    fn render(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::javascript();
        builder.emit(node);
        builder.build()
    }

    #[test]
    fn test_async_fn() {
        let f = Fn::new("initDB").async_().statement("return db;");
        assert_eq!(render(&f), "async function initDB() {\n  return db;\n}\n");
    }

    #[test]
    fn test_fn_params() {
        let f = Fn::new("add").param("a").param("b").statement("return a + b;");
        assert_eq!(
            render(&f),
            "function add(a, b) {\n  return a + b;\n}\n"
        );
    }

    #[test]
    fn test_async_iife() {
        let iife = AsyncIife::new()
            .statement("const db = await initDB();")
            .blank()
            .statement("run(db);");
        assert_eq!(
            render(&iife),
            "(async () => {\n  const db = await initDB();\n\n  run(db);\n})();\n"
        );
    }
}
