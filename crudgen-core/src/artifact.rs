use std::path::{Path, PathBuf};

use crate::{Result, Sink};

/// Trait for types that render one generated file
pub trait GeneratedFile {
    /// Target filename, relative to the application directory
    fn filename(&self) -> &'static str;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Render into an immutable artifact
    fn to_artifact(&self) -> Artifact {
        Artifact::new(self.filename(), self.render()).with_rules(self.rules())
    }
}

/// A named unit of generated source text.
///
/// Artifacts are immutable once built. Writing one replaces the whole
/// target file; nothing is ever appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    filename: String,
    content: String,
    rules: FileRules,
}

impl Artifact {
    /// Create a new artifact (default rules: always overwrite)
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the target filename, relative to the application directory
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the write rules
    pub fn rules(&self) -> FileRules {
        self.rules
    }

    /// Resolve the target path inside `dir`
    pub fn path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.filename)
    }

    /// Write the artifact into `dir` according to its rules
    pub fn write(&self, sink: &mut dyn Sink, dir: &Path) -> Result<WriteResult> {
        let path = self.path(dir);

        match self.rules.overwrite {
            Overwrite::Always => {
                sink.write(&path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if sink.exists(&path) {
                    tracing::debug!(path = %path.display(), "keeping existing file");
                    Ok(WriteResult::Skipped)
                } else {
                    sink.write(&path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how an artifact should be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist (user-editable project files)
    IfMissing,
}
