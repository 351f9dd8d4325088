//! Target-agnostic code generation traits.

use std::path::{Path, PathBuf};

use crudgen_core::{Artifact, Sink, WriteResult};

/// Trait for backend targets.
///
/// Implement this trait to add support for generating a backend in a new
/// framework or language.
pub trait BackendCodegen {
    /// Target identifier (e.g., "express-sqlite")
    fn target(&self) -> &'static str;

    /// Application name; also the output directory name
    fn app_name(&self) -> &str;

    /// Render every artifact without touching the file system
    fn artifacts(&self) -> Vec<Artifact>;

    /// Create `<output_root>/<app_name>` and write every artifact into it
    fn generate(
        &self,
        sink: &mut dyn Sink,
        output_root: &Path,
    ) -> crudgen_core::Result<GenerateResult> {
        let output_dir = output_root.join(self.app_name());
        sink.create_dir_all(&output_dir)?;

        let mut result = GenerateResult {
            output_dir,
            ..GenerateResult::default()
        };

        for artifact in self.artifacts() {
            let name = artifact.filename().to_string();
            match artifact.write(sink, &result.output_dir)? {
                WriteResult::Written => result.written.push(name),
                WriteResult::Skipped => result.skipped.push(name),
            }
        }

        tracing::info!(
            target = self.target(),
            dir = %result.output_dir.display(),
            written = result.written.len(),
            skipped = result.skipped.len(),
            "generated backend"
        );

        Ok(result)
    }
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Directory the artifacts were written to
    pub output_dir: PathBuf,
    /// Files that were written
    pub written: Vec<String>,
    /// Files that already existed and are only created once
    pub skipped: Vec<String>,
}

#[cfg(test)]
mod tests {
    use crudgen_core::{FileRules, MemorySink};

    use super::*;

    struct TwoFiles;

    impl BackendCodegen for TwoFiles {
        fn target(&self) -> &'static str {
            "test"
        }

        fn app_name(&self) -> &str {
            "App"
        }

        fn artifacts(&self) -> Vec<Artifact> {
            vec![
                Artifact::new("a.js", "a"),
                Artifact::new("b.json", "b").with_rules(FileRules::if_missing()),
            ]
        }
    }

    #[test]
    fn test_generate_creates_app_dir() {
        let mut sink = MemorySink::new();

        let result = TwoFiles.generate(&mut sink, Path::new("out")).unwrap();

        assert!(sink.has_dir("out/App"));
        assert_eq!(result.output_dir, PathBuf::from("out/App"));
        assert_eq!(result.written, vec!["a.js", "b.json"]);
        assert_eq!(sink.get("out/App/a.js"), Some("a"));
    }

    #[test]
    fn test_generate_twice_skips_create_once_files() {
        let mut sink = MemorySink::new();

        TwoFiles.generate(&mut sink, Path::new("out")).unwrap();
        let result = TwoFiles.generate(&mut sink, Path::new("out")).unwrap();

        assert_eq!(result.written, vec!["a.js"]);
        assert_eq!(result.skipped, vec!["b.json"]);
    }
}
