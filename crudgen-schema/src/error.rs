use std::{io, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<SchemaError>>;

/// Source context for parse error reporting.
///
/// Encapsulates the source content and filename so that parse failures
/// can point at the offending location.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<SchemaError> {
        Box::new(SchemaError::Parse {
            src: self.named_source(),
            span: source.span().map(SourceSpan::from),
            format: "TOML",
            reason: source.message().to_string(),
        })
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<SchemaError> {
        let span = self
            .offset_of(source.line(), source.column())
            .map(|offset| SourceSpan::from(offset..offset));

        Box::new(SchemaError::Parse {
            src: self.named_source(),
            span,
            format: "JSON",
            reason: strip_position(&source.to_string()),
        })
    }

    /// Convert a 1-based line and column into a byte offset.
    fn offset_of(&self, line: usize, column: usize) -> Option<usize> {
        if line == 0 {
            return None;
        }

        let mut offset = 0;
        for (i, text) in self.src.split_inclusive('\n').enumerate() {
            if i + 1 == line {
                return Some((offset + column.saturating_sub(1)).min(self.src.len()));
            }
            offset += text.len();
        }
        Some(self.src.len())
    }
}

/// serde_json appends " at line X column Y"; the span already carries that.
fn strip_position(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

/// An invalid schema. Always reported before any file is written.
#[derive(Debug, Error, Diagnostic)]
pub enum SchemaError {
    #[error("failed to read '{}'", .path.display())]
    #[diagnostic(
        code(crudgen::io),
        help("run 'crudgen init' to create an example schema")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {format} schema")]
    #[diagnostic(code(crudgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
        format: &'static str,
        reason: String,
    },

    #[error("appName must not be empty")]
    #[diagnostic(
        code(crudgen::empty_app_name),
        help("appName names the output directory, e.g. \"NotesApp\"")
    )]
    EmptyAppName,

    #[error("invalid appName '{name}'")]
    #[diagnostic(code(crudgen::invalid_app_name), help("{reason}"))]
    InvalidAppName { name: String, reason: String },

    #[error("model at position {index} has an empty name")]
    #[diagnostic(code(crudgen::empty_model_name))]
    EmptyModelName { index: usize },

    #[error("duplicate model '{name}'")]
    #[diagnostic(
        code(crudgen::duplicate_model),
        help("model names must be unique; comparison is case-sensitive")
    )]
    DuplicateModel { name: String },

    #[error("route references unknown model '{model}'")]
    #[diagnostic(code(crudgen::unknown_model), help("declared models: {known}"))]
    UnknownRouteModel { model: String, known: String },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(crudgen::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        name: String,
        context: String,
        reason: String,
    },
}
