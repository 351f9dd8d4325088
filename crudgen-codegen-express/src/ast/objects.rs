//! JavaScript object literal builder.

use crudgen_codegen::builder::CodeFragment;

/// Builder for object literals.
///
/// Values are raw expressions; quote strings with
/// [`string_literal`](super::string_literal) first.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    entries: Vec<(String, Option<String>)>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// `key: value`
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), Some(value.into())));
        self
    }

    /// Shorthand property, `{ key }`.
    pub fn shorthand(mut self, key: impl Into<String>) -> Self {
        self.entries.push((key.into(), None));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Single-line form, `{ a: 1, b }`.
    pub fn inline(&self) -> String {
        if self.entries.is_empty() {
            return "{}".to_string();
        }
        let entries = self
            .entries
            .iter()
            .map(Self::entry)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ {} }}", entries)
    }

    /// Multi-line form with trailing commas, opened by `prefix` and closed
    /// by `suffix`: `<prefix>{` ... `}<suffix>`.
    pub fn block(&self, prefix: &str, suffix: &str) -> CodeFragment {
        CodeFragment::block(
            format!("{}{{", prefix),
            self.entries
                .iter()
                .map(|entry| CodeFragment::line(format!("{},", Self::entry(entry))))
                .collect(),
            format!("}}{}", suffix),
        )
    }

    fn entry((key, value): &(String, Option<String>)) -> String {
        match value {
            Some(value) => format!("{}: {}", key, value),
            None => key.clone(),
        }
    }
}
