//! Compilation context passed through pipeline phases.

use crudgen_schema::Schema;

use super::diagnostic::{Diagnostic, Severity};
use crate::ir::AppIR;

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct CompilationContext {
    /// The schema being compiled.
    pub schema: Schema,
    /// The lowered Application IR (populated by LowerPhase).
    pub ir: Option<AppIR>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            ir: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the IR out of the context, consuming it.
    ///
    /// # Panics
    ///
    /// Panics if the IR has not been set (i.e., LowerPhase hasn't run).
    pub fn take_ir(&mut self) -> AppIR {
        self.ir.take().expect("IR not set - did LowerPhase run?")
    }
}
