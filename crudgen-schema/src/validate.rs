//! Schema validation.
//!
//! [`Schema::validate`] enforces the structural invariants every run needs:
//! a usable output directory name, unique model names, and routes that
//! point at declared models.
//!
//! Identifiers are otherwise trusted: model and field names flow verbatim
//! into generated SQL and route paths. [`Schema::validate_identifiers`] is
//! the opt-in hardening step for callers that do not trust their input.

use std::collections::HashSet;

use crate::{Result, Schema, SchemaError};

/// SQLite keywords rejected as table or column names in strict mode.
/// Source: https://www.sqlite.org/lang_keywords.html (reserved subset)
pub(crate) const SQL_KEYWORDS: &[&str] = &[
    "add", "all", "alter", "and", "as", "autoincrement", "between", "case", "check", "collate",
    "commit", "constraint", "create", "default", "deferrable", "delete", "distinct", "drop",
    "else", "escape", "except", "exists", "foreign", "from", "group", "having", "if", "in",
    "index", "insert", "intersect", "into", "is", "isnull", "join", "limit", "not", "notnull",
    "null", "on", "or", "order", "primary", "references", "select", "set", "table", "then",
    "to", "transaction", "union", "unique", "update", "using", "values", "when", "where",
];

/// Check if a name is a reserved SQL keyword (case-insensitive).
pub fn is_sql_keyword(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    SQL_KEYWORDS.contains(&lower.as_str())
}

/// Validate that a name is a plain identifier.
///
/// Returns None if valid, Some(reason) if invalid
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if is_sql_keyword(name) {
        return Some("name is a reserved SQL keyword");
    }

    None
}

/// Why an appName cannot name a directory, if it cannot.
fn app_name_problem(name: &str) -> Option<&'static str> {
    if name == "." || name == ".." {
        return Some("appName cannot be a relative path component");
    }
    if name.contains('/') || name.contains('\\') {
        return Some("appName cannot contain path separators");
    }
    if name.contains('\0') {
        return Some("appName cannot contain NUL characters");
    }
    None
}

impl Schema {
    /// Check the structural invariants of the schema.
    ///
    /// Returns the first violation found. Unknown field types, unsupported
    /// route methods and models without fields are not errors.
    pub fn validate(&self) -> Result<()> {
        if self.app_name.is_empty() {
            return Err(Box::new(SchemaError::EmptyAppName));
        }
        if let Some(reason) = app_name_problem(&self.app_name) {
            return Err(Box::new(SchemaError::InvalidAppName {
                name: self.app_name.clone(),
                reason: reason.to_string(),
            }));
        }

        let mut seen = HashSet::new();
        for (index, model) in self.models.iter().enumerate() {
            if model.name.is_empty() {
                return Err(Box::new(SchemaError::EmptyModelName { index }));
            }
            if !seen.insert(model.name.as_str()) {
                return Err(Box::new(SchemaError::DuplicateModel {
                    name: model.name.clone(),
                }));
            }
        }

        for route in &self.routes {
            if !seen.contains(route.model.as_str()) {
                return Err(Box::new(SchemaError::UnknownRouteModel {
                    model: route.model.clone(),
                    known: self.known_models(),
                }));
            }
        }

        Ok(())
    }

    /// Reject model and field names that are not plain identifiers.
    pub fn validate_identifiers(&self) -> Result<()> {
        for model in &self.models {
            check_identifier(&model.name, "model".to_string())?;

            for field in model.fields.keys() {
                check_identifier(field, format!("field in model '{}'", model.name))?;
            }
        }
        Ok(())
    }

    fn known_models(&self) -> String {
        if self.models.is_empty() {
            "(none)".to_string()
        } else {
            self.model_names().collect::<Vec<_>>().join(", ")
        }
    }
}

fn check_identifier(name: &str, context: String) -> Result<()> {
    match validate_identifier(name) {
        Some(reason) => Err(Box::new(SchemaError::InvalidIdentifier {
            name: name.to_string(),
            context,
            reason: reason.to_string(),
        })),
        None => Ok(()),
    }
}
