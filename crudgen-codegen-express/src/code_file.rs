//! CodeFile abstraction for structured CommonJS file generation.

use crudgen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::{JsObject, Require};

/// A structured representation of a CommonJS source file.
///
/// Sections are rendered in order, separated by blank lines: header
/// comment, requires, body elements (one blank line between each), and a
/// single `module.exports` statement.
///
/// # Example
///
/// ```
/// use crudgen_codegen_express::{CodeFile, ast::Require};
///
/// let code = CodeFile::new()
///     .require(Require::new("express", "express"))
///     .raw("const app = express();")
///     .export("app")
///     .render();
///
/// assert_eq!(
///     code,
///     "const express = require(\"express\");\n\nconst app = express();\n\nmodule.exports = { app };\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    header: Vec<String>,
    requires: Vec<Require>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<String>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the leading `//` comment.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    pub fn require(mut self, require: Require) -> Self {
        self.requires.push(require);
        self
    }

    pub fn requires(mut self, requires: impl IntoIterator<Item = Require>) -> Self {
        self.requires.extend(requires);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add a body element made of raw lines.
    pub fn raw(mut self, code: &str) -> Self {
        self.body
            .push(code.lines().map(CodeFragment::line).collect());
        self
    }

    /// Export a top-level binding through `module.exports`.
    pub fn export(mut self, name: impl Into<String>) -> Self {
        self.exports.push(name.into());
        self
    }

    pub fn render(&self) -> String {
        self.render_with_indent(Indent::JAVASCRIPT)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let mut sections = 0;

        let mut section = |builder: &mut CodeBuilder| {
            if sections > 0 {
                builder.push_blank();
            }
            sections += 1;
        };

        if !self.header.is_empty() {
            section(&mut builder);
            for line in &self.header {
                builder.push_comment(line);
            }
        }

        if !self.requires.is_empty() {
            section(&mut builder);
            for require in &self.requires {
                builder.emit(require);
            }
        }

        for fragments in &self.body {
            section(&mut builder);
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        if !self.exports.is_empty() {
            section(&mut builder);
            let exports = self
                .exports
                .iter()
                .fold(JsObject::new(), |obj, name| obj.shorthand(name.as_str()));
            builder.push_line(&format!("module.exports = {};", exports.inline()));
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
            && self.requires.is_empty()
            && self.body.is_empty()
            && self.exports.is_empty()
    }
}
