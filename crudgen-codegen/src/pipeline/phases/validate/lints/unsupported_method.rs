//! Lint for route methods without a handler mapping.

use crudgen_schema::{HttpMethod, Schema};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns on declared methods that are ignored.
///
/// Matching is case-sensitive, so `"get"` is reported here too.
pub struct UnsupportedMethodLint;

impl Lint for UnsupportedMethodLint {
    fn name(&self) -> &'static str {
        "unsupported-method"
    }

    fn description(&self) -> &'static str {
        "Flag route methods that produce no handler"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        for (index, route) in schema.routes.iter().enumerate() {
            for method in route.unsupported_methods() {
                let mut message = format!(
                    "unsupported method '{}' on route for '{}' is ignored",
                    method, route.model
                );
                let upper = method.to_ascii_uppercase();
                if HttpMethod::parse(&upper).is_some() {
                    message.push_str(&format!(" (methods are case-sensitive, use '{}')", upper));
                }

                diagnostics.push(
                    Diagnostic::warning("validate", message).at(format!("routes[{}]", index)),
                );
            }
        }
    }
}
