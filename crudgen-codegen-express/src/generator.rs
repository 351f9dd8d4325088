//! Express + SQLite backend generator.

use crudgen_codegen::{BackendCodegen, ir::AppIR, pipeline::CompilationContext};
use crudgen_core::{Artifact, GeneratedFile};

use crate::files::{DbJs, PackageJson, ServerJs};

/// Renders an [`AppIR`] into `db.js`, `server.js` and, on request,
/// `package.json`.
#[derive(Debug, Clone)]
pub struct Generator {
    ir: AppIR,
    package_json: bool,
}

impl Generator {
    pub fn new(ir: AppIR) -> Self {
        Self {
            ir,
            package_json: false,
        }
    }

    /// Create a generator from a completed pipeline run.
    ///
    /// # Panics
    ///
    /// Panics if the pipeline did not lower the schema.
    pub fn from_context(mut ctx: CompilationContext) -> Self {
        Self::new(ctx.take_ir())
    }

    /// Also emit a `package.json` (created once, never overwritten).
    pub fn with_package_json(mut self, enabled: bool) -> Self {
        self.package_json = enabled;
        self
    }

    pub fn ir(&self) -> &AppIR {
        &self.ir
    }
}

impl BackendCodegen for Generator {
    fn target(&self) -> &'static str {
        "express-sqlite"
    }

    fn app_name(&self) -> &str {
        &self.ir.meta.name
    }

    fn artifacts(&self) -> Vec<Artifact> {
        let name = self.app_name();
        let mut artifacts = vec![
            DbJs::new(name, &self.ir.tables).to_artifact(),
            ServerJs::new(name, &self.ir.handlers).to_artifact(),
        ];

        if self.package_json {
            artifacts.push(PackageJson::new(name).to_artifact());
        }

        tracing::debug!(
            app = name,
            tables = self.ir.tables.len(),
            handlers = self.ir.handlers.len(),
            files = artifacts.len(),
            "rendered artifacts"
        );

        artifacts
    }
}

#[cfg(test)]
mod tests {
    use crudgen_codegen::pipeline::Pipeline;
    use crudgen_core::Overwrite;
    use crudgen_schema::{Model, Route, Schema};

    use super::*;

    fn generator() -> Generator {
        let schema = Schema::new("NotesApp")
            .model(Model::new("Note").field("title", "string"))
            .route(Route::new("Note", ["GET"]));
        Generator::from_context(Pipeline::new().run(schema).unwrap())
    }

    #[test]
    fn test_two_artifacts_by_default() {
        let names: Vec<_> = generator()
            .artifacts()
            .iter()
            .map(|a| a.filename().to_string())
            .collect();

        assert_eq!(names, vec!["db.js", "server.js"]);
    }

    #[test]
    fn test_package_json_opt_in() {
        let artifacts = generator().with_package_json(true).artifacts();

        assert_eq!(artifacts.len(), 3);
        assert_eq!(artifacts[2].filename(), "package.json");
        assert_eq!(artifacts[2].rules().overwrite, Overwrite::IfMissing);
        assert_eq!(artifacts[0].rules().overwrite, Overwrite::Always);
    }

    #[test]
    fn test_target_and_app_name() {
        let generator = generator();
        assert_eq!(generator.target(), "express-sqlite");
        assert_eq!(generator.app_name(), "NotesApp");
    }
}
