//! Application Intermediate Representation.
//!
//! The IR is the structured form every target renders from: a list of
//! tables with typed columns and a list of route handler descriptors.
//! It is produced by [`crate::pipeline::phases::LowerPhase`].
//!
//! ```text
//! Schema → validate → AppIR (lowering) → target renderer → artifacts
//! ```

use crudgen_core::ColumnType;
use crudgen_schema::HttpMethod;
use serde::Serialize;

/// Application IR - unified representation for code generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppIR {
    /// Application metadata.
    pub meta: AppMeta,
    /// One table per model, in model order.
    pub tables: Vec<Table>,
    /// Request handlers, in route order then GET, POST, DELETE.
    pub handlers: Vec<Handler>,
}

/// Application metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppMeta {
    /// Application name.
    pub name: String,
}

/// A storage table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    /// Table name, taken verbatim from the model name.
    pub name: String,
    /// Columns in field declaration order.
    pub columns: Vec<Column>,
}

/// A typed table column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    #[serde(serialize_with = "serialize_column_type")]
    pub ty: ColumnType,
}

/// A request handler descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Handler {
    #[serde(serialize_with = "serialize_method")]
    pub method: HttpMethod,
    /// Model name, verbatim. Also the table the handler operates on.
    pub model: String,
    /// URL path, using the lower-cased model name as segment.
    pub path: String,
    pub kind: HandlerKind,
}

/// What a handler does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerKind {
    /// Return every row of the table.
    ListAll,
    /// Insert one row built from the request body.
    Insert,
    /// Delete the row whose `id` equals the path parameter.
    DeleteById,
}

impl HandlerKind {
    pub fn for_method(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::ListAll,
            HttpMethod::Post => Self::Insert,
            HttpMethod::Delete => Self::DeleteById,
        }
    }
}

impl Handler {
    pub fn new(model: impl Into<String>, method: HttpMethod) -> Self {
        let model = model.into();
        let path = match method {
            HttpMethod::Get | HttpMethod::Post => collection_path(&model),
            HttpMethod::Delete => item_path(&model),
        };

        Self {
            method,
            path,
            kind: HandlerKind::for_method(method),
            model,
        }
    }

    /// Table this handler reads or writes.
    pub fn table(&self) -> &str {
        &self.model
    }
}

/// `/api/<model lowercased>`
pub fn collection_path(model: &str) -> String {
    format!("/api/{}", model.to_lowercase())
}

/// `/api/<model lowercased>/:id`
pub fn item_path(model: &str) -> String {
    format!("{}/:id", collection_path(model))
}

fn serialize_column_type<S: serde::Serializer>(
    ty: &ColumnType,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(ty.as_str())
}

fn serialize_method<S: serde::Serializer>(
    method: &HttpMethod,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(method.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_lowercase_model() {
        assert_eq!(collection_path("BlogPost"), "/api/blogpost");
        assert_eq!(item_path("BlogPost"), "/api/blogpost/:id");
    }

    #[test]
    fn test_handler_new() {
        let get = Handler::new("Note", HttpMethod::Get);
        assert_eq!(get.path, "/api/note");
        assert_eq!(get.kind, HandlerKind::ListAll);
        assert_eq!(get.table(), "Note");

        let delete = Handler::new("Note", HttpMethod::Delete);
        assert_eq!(delete.path, "/api/note/:id");
        assert_eq!(delete.kind, HandlerKind::DeleteById);
    }

    #[test]
    fn test_serialize_handler() {
        let json = serde_json::to_value(Handler::new("Note", HttpMethod::Post)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "method": "POST",
                "model": "Note",
                "path": "/api/note",
                "kind": "insert",
            })
        );
    }
}
