use std::fmt;

use serde::Deserialize;

/// HTTP methods that produce a request handler.
///
/// The declaration order of this enum is the order handlers are emitted
/// in, regardless of the order a route lists its methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    /// All supported methods, in emission order.
    pub const ALL: [HttpMethod; 3] = [HttpMethod::Get, HttpMethod::Post, HttpMethod::Delete];

    /// Parse a declared method. Matching is exact and case-sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binds an HTTP surface to a model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Route {
    /// Name of the model this route serves
    pub model: String,

    /// Declared methods, as written. Duplicates and unsupported values are
    /// kept here and filtered by [`Route::handler_methods`].
    pub methods: Vec<String>,
}

impl Route {
    pub fn new(
        model: impl Into<String>,
        methods: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            model: model.into(),
            methods: methods.into_iter().map(Into::into).collect(),
        }
    }

    /// Methods that get a handler: supported, deduplicated, in GET, POST,
    /// DELETE order.
    pub fn handler_methods(&self) -> Vec<HttpMethod> {
        HttpMethod::ALL
            .into_iter()
            .filter(|method| self.methods.iter().any(|m| m == method.as_str()))
            .collect()
    }

    /// Declared methods that have no handler mapping.
    pub fn unsupported_methods(&self) -> impl Iterator<Item = &str> {
        self.methods
            .iter()
            .map(String::as_str)
            .filter(|m| HttpMethod::parse(m).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_methods_fixed_order() {
        let route = Route::new("Note", ["DELETE", "GET", "POST"]);
        assert_eq!(
            route.handler_methods(),
            vec![HttpMethod::Get, HttpMethod::Post, HttpMethod::Delete]
        );
    }

    #[test]
    fn test_handler_methods_deduplicated() {
        let route = Route::new("Note", ["POST", "GET", "POST", "GET"]);
        assert_eq!(
            route.handler_methods(),
            vec![HttpMethod::Get, HttpMethod::Post]
        );
    }

    #[test]
    fn test_unsupported_methods_ignored() {
        let route = Route::new("Note", ["PATCH", "get"]);
        assert!(route.handler_methods().is_empty());
        assert_eq!(
            route.unsupported_methods().collect::<Vec<_>>(),
            vec!["PATCH", "get"]
        );
    }

    #[test]
    fn test_parse_method() {
        assert_eq!(HttpMethod::parse("DELETE"), Some(HttpMethod::Delete));
        assert_eq!(HttpMethod::parse("PUT"), None);
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
