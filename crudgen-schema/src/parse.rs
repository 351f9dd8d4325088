//! Schema parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Result, Schema, SchemaError, SourceContext};

/// On-disk schema formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Toml,
}

impl SchemaFormat {
    /// Pick the format from a file extension: `.toml` is TOML, anything
    /// else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

impl FromStr for Schema {
    type Err = Box<SchemaError>;

    fn from_str(s: &str) -> Result<Self> {
        Schema::from_json_str(s)
    }
}

impl Schema {
    /// Parse and validate a schema file, choosing the format by extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(SchemaError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_schema(
            &content,
            &path.display().to_string(),
            SchemaFormat::from_path(path),
        )
    }

    /// Parse and validate a JSON schema.
    pub fn from_json_str(content: &str) -> Result<Self> {
        parse_schema(content, "schema.json", SchemaFormat::Json)
    }

    /// Parse and validate a TOML schema.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse_schema(content, "schema.toml", SchemaFormat::Toml)
    }

    /// Parse and validate a schema with a custom filename for error reporting.
    pub fn from_str_with_filename(
        content: &str,
        filename: &str,
        format: SchemaFormat,
    ) -> Result<Self> {
        parse_schema(content, filename, format)
    }
}

/// Parse a schema from content with the given filename for error reporting.
pub fn parse_schema(content: &str, filename: &str, format: SchemaFormat) -> Result<Schema> {
    let source_ctx = SourceContext::new(content, filename);
    let schema: Schema = match format {
        SchemaFormat::Json => {
            serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?
        }
        SchemaFormat::Toml => toml::from_str(content).map_err(|e| source_ctx.toml_error(e))?,
    };
    schema.validate()?;
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crudgen_core::FieldType;

    use super::*;

    const NOTES_JSON: &str = r#"{
        "appName": "NotesApp",
        "models": [
            { "name": "Note", "fields": { "id": "number", "title": "string" } }
        ],
        "routes": [
            { "model": "Note", "methods": ["GET", "POST"] }
        ]
    }"#;

    #[test]
    fn test_parse_json() {
        let schema: Schema = NOTES_JSON.parse().unwrap();

        assert_eq!(schema.app_name, "NotesApp");
        assert_eq!(schema.models.len(), 1);
        assert_eq!(schema.models[0].fields["id"], FieldType::Number);
        assert_eq!(schema.routes[0].methods, vec!["GET", "POST"]);
    }

    #[test]
    fn test_json_field_order_preserved() {
        let schema = Schema::from_json_str(
            r#"{"appName": "A", "models": [{"name": "M", "fields": {"z": "string", "a": "number", "m": "string"}}], "routes": []}"#,
        )
        .unwrap();

        let names: Vec<_> = schema.models[0].fields.keys().cloned().collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_parse_toml() {
        let schema = Schema::from_toml_str(
            r#"
            appName = "NotesApp"

            [[models]]
            name = "Note"
            fields = { id = "number", title = "string" }

            [[routes]]
            model = "Note"
            methods = ["GET"]
            "#,
        )
        .unwrap();

        assert_eq!(schema.app_name, "NotesApp");
        let names: Vec<_> = schema.models[0].fields.keys().cloned().collect();
        assert_eq!(names, vec!["id", "title"]);
    }

    #[test]
    fn test_missing_top_level_field_is_parse_error() {
        let err = Schema::from_json_str(r#"{"appName": "A", "models": []}"#).unwrap_err();

        match *err {
            SchemaError::Parse { format, reason, .. } => {
                assert_eq!(format, "JSON");
                assert!(reason.contains("routes"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_type_parses() {
        let schema = Schema::from_json_str(
            r#"{"appName": "A", "models": [{"name": "M", "fields": {"done": "boolean"}}], "routes": []}"#,
        )
        .unwrap();

        assert_eq!(
            schema.models[0].fields["done"],
            FieldType::Unknown("boolean".to_string())
        );
    }

    #[test]
    fn test_non_string_field_types_parse() {
        let schema = Schema::from_json_str(
            r#"{"appName": "A", "models": [{"name": "M", "fields": {"done": true, "n": null, "id": "number"}}], "routes": []}"#,
        )
        .unwrap();

        let fields = &schema.models[0].fields;
        assert_eq!(fields["done"], FieldType::Unknown("true".to_string()));
        assert_eq!(fields["n"], FieldType::Unknown("null".to_string()));
        assert_eq!(fields["id"], FieldType::Number);
        let names: Vec<_> = fields.keys().cloned().collect();
        assert_eq!(names, vec!["done", "n", "id"]);
    }

    #[test]
    fn test_toml_non_string_field_type_parses() {
        let schema = Schema::from_toml_str(
            r#"
            appName = "A"
            routes = []

            [[models]]
            name = "M"
            fields = { done = true, count = 3 }
            "#,
        )
        .unwrap();

        assert_eq!(
            schema.models[0].fields["done"],
            FieldType::Unknown("true".to_string())
        );
        assert_eq!(
            schema.models[0].fields["count"],
            FieldType::Unknown("3".to_string())
        );
    }

    #[test]
    fn test_parse_validates() {
        let err = Schema::from_json_str(
            r#"{"appName": "A", "models": [], "routes": [{"model": "Ghost", "methods": ["GET"]}]}"#,
        )
        .unwrap_err();

        assert!(matches!(*err, SchemaError::UnknownRouteModel { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Schema::from_file("does/not/exist.json").unwrap_err();
        assert!(matches!(*err, SchemaError::Io { .. }));
    }

    #[test]
    fn test_from_file_toml() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("schema.toml");
        std::fs::write(
            &path,
            "appName = \"App\"\nmodels = []\nroutes = []\n",
        )
        .unwrap();

        let schema = Schema::from_file(&path).unwrap();
        assert_eq!(schema.app_name, "App");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SchemaFormat::from_path(&PathBuf::from("schema.toml")),
            SchemaFormat::Toml
        );
        assert_eq!(
            SchemaFormat::from_path(&PathBuf::from("schema.json")),
            SchemaFormat::Json
        );
        assert_eq!(
            SchemaFormat::from_path(&PathBuf::from("schema")),
            SchemaFormat::Json
        );
    }
}
