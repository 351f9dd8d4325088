//! Lint for methods declared more than once on a route.

use std::collections::HashSet;

use crudgen_schema::Schema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns on repeated methods within one route; only one handler is emitted.
pub struct DuplicateMethodLint;

impl Lint for DuplicateMethodLint {
    fn name(&self) -> &'static str {
        "duplicate-method"
    }

    fn description(&self) -> &'static str {
        "Flag methods listed more than once on a route"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        for (index, route) in schema.routes.iter().enumerate() {
            let mut seen = HashSet::new();
            let mut reported = HashSet::new();

            for method in &route.methods {
                if !seen.insert(method.as_str()) && reported.insert(method.as_str()) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "method '{}' is listed more than once on route for '{}'",
                                method, route.model
                            ),
                        )
                        .at(format!("routes[{}]", index)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crudgen_schema::{Model, Route};

    use super::*;

    #[test]
    fn test_repeated_method_reported_once() {
        let schema = Schema::new("App")
            .model(Model::new("Note"))
            .route(Route::new("Note", ["GET", "POST", "GET", "GET"]));

        let mut diagnostics = Vec::new();
        DuplicateMethodLint.check(&schema, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "method 'GET' is listed more than once on route for 'Note'"
        );
    }

    #[test]
    fn test_separate_routes_are_independent() {
        let schema = Schema::new("App")
            .model(Model::new("Note"))
            .route(Route::new("Note", ["GET"]))
            .route(Route::new("Note", ["GET"]));

        let mut diagnostics = Vec::new();
        DuplicateMethodLint.check(&schema, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
