//! Lint for field types other than `number` and `string`.

use crudgen_schema::Schema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns on unknown field types, which are stored as TEXT.
pub struct UnknownFieldTypeLint;

impl Lint for UnknownFieldTypeLint {
    fn name(&self) -> &'static str {
        "unknown-field-type"
    }

    fn description(&self) -> &'static str {
        "Flag field types that fall back to TEXT"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        for model in &schema.models {
            for (field, ty) in &model.fields {
                if ty.is_known() {
                    continue;
                }
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "unknown type '{}' for field '{}', stored as TEXT",
                            ty, field
                        ),
                    )
                    .at(format!("models.{}.fields.{}", model.name, field)),
                );
            }
        }
    }
}
