//! Validate phase - structural checks, then lints.

mod lint;
pub mod lints;

pub use lint::{Lint, LintInfo};
pub use lints::{DuplicateMethodLint, EmptyFieldsLint, UnknownFieldTypeLint, UnsupportedMethodLint};

use crate::{
    Result,
    pipeline::{CompilationContext, Phase},
};

/// Phase that validates the schema.
///
/// Structural problems (see `Schema::validate`) abort the run. Lints only
/// ever add warnings.
pub struct ValidatePhase {
    strict_identifiers: bool,
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            strict_identifiers: false,
            lints: vec![
                Box::new(UnknownFieldTypeLint),
                Box::new(EmptyFieldsLint),
                Box::new(UnsupportedMethodLint),
                Box::new(DuplicateMethodLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self {
            strict_identifiers: false,
            lints: Vec::new(),
        }
    }

    pub fn strict_identifiers(mut self, strict: bool) -> Self {
        self.strict_identifiers = strict;
        self
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check schema integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.schema.validate()?;
        if self.strict_identifiers {
            ctx.schema.validate_identifiers()?;
        }

        for lint in &self.lints {
            lint.check(&ctx.schema, &mut ctx.diagnostics);
        }

        Ok(())
    }
}
