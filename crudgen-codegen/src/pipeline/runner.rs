//! Pipeline orchestrator.

use crudgen_schema::Schema;

use super::{
    CompilationContext, Phase, PhaseInfo,
    phases::{LowerPhase, ValidatePhase},
};
use crate::Result;

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, lower) followed by any user phases.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .strict_identifiers(true)
///     .phase(MyCustomPhase)
///     .run(schema)?;
/// ```
#[derive(Default)]
pub struct Pipeline {
    strict_identifiers: bool,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject model and field names that are not plain identifiers.
    pub fn strict_identifiers(mut self, strict: bool) -> Self {
        self.strict_identifiers = strict;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Names and descriptions of every phase, in execution order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        let mut info = vec![ValidatePhase::new().info(), LowerPhase.info()];
        info.extend(self.phases.iter().map(|phase| phase.info()));
        info
    }

    /// Run the pipeline on a schema.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error. A schema that fails validation never
    /// reaches lowering.
    pub fn run(&self, schema: Schema) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(schema);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(ValidatePhase::new().strict_identifiers(self.strict_identifiers)),
            Box::new(LowerPhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            tracing::debug!(phase = phase.name(), "running phase");
            phase.run(&mut ctx)?;
        }

        tracing::debug!(
            app = %ctx.schema.app_name,
            warnings = ctx.warning_count(),
            "pipeline finished"
        );

        Ok(ctx)
    }
}
