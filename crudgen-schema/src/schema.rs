use crudgen_core::FieldType;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::Route;

/// Root schema: the sole input of a generation run.
///
/// None of the top-level fields have defaults; a document missing one of
/// them fails to parse.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Application name, used for the output directory and the startup banner
    pub app_name: String,

    /// Data entities, one storage table each
    pub models: Vec<Model>,

    /// HTTP surfaces bound to models
    pub routes: Vec<Route>,
}

impl Schema {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            models: Vec::new(),
            routes: Vec::new(),
        }
    }

    pub fn model(mut self, model: Model) -> Self {
        self.models.push(model);
        self
    }

    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Look up a model by exact name.
    pub fn find_model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Model names in declaration order.
    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|m| m.name.as_str())
    }
}

/// A data entity, mapped to one storage table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Model {
    /// Table name (verbatim) and, lower-cased, the URL path segment
    pub name: String,

    /// Field name to declared type, in declaration order
    pub fields: IndexMap<String, FieldType>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, field_type: impl Into<FieldType>) -> Self {
        self.fields.insert(name.into(), field_type.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let model = Model::new("Note")
            .field("title", "string")
            .field("id", "number")
            .field("body", "string");

        let names: Vec<_> = model.fields.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["title", "id", "body"]);
    }

    #[test]
    fn test_find_model() {
        let schema = Schema::new("App")
            .model(Model::new("Note"))
            .model(Model::new("Tag"));

        assert!(schema.find_model("Tag").is_some());
        assert!(schema.find_model("tag").is_none());
        assert_eq!(schema.model_names().collect::<Vec<_>>(), vec!["Note", "Tag"]);
    }
}
