//! Lint for models without fields.

use crudgen_schema::Schema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns on models that declare no fields.
pub struct EmptyFieldsLint;

impl Lint for EmptyFieldsLint {
    fn name(&self) -> &'static str {
        "empty-fields"
    }

    fn description(&self) -> &'static str {
        "Flag models whose table would have no columns"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        for model in schema.models.iter().filter(|m| m.fields.is_empty()) {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!("model '{}' has no fields", model.name),
                )
                .at(format!("models.{}", model.name)),
            );
        }
    }
}
