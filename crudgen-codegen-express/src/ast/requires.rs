//! CommonJS `require` builder.

use crudgen_codegen::builder::{CodeFragment, Renderable};

use super::string_literal;

/// Builder for `const ... = require("...");` statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Require {
    module: String,
    binding: Binding,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Binding {
    Default(String),
    Named(Vec<String>),
}

impl Require {
    /// `const <name> = require("<module>");`
    pub fn new(name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            binding: Binding::Default(name.into()),
        }
    }

    /// `const { <names> } = require("<module>");`
    pub fn named(
        module: impl Into<String>,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            module: module.into(),
            binding: Binding::Named(names.into_iter().map(Into::into).collect()),
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn build(&self) -> String {
        let binding = match &self.binding {
            Binding::Default(name) => name.clone(),
            Binding::Named(names) => format!("{{ {} }}", names.join(", ")),
        };
        format!(
            "const {} = require({});",
            binding,
            string_literal(&self.module)
        )
    }
}

impl Renderable for Require {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}
