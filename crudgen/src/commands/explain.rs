use std::path::PathBuf;

use clap::Args;
use crudgen_codegen::pipeline::{Pipeline, phases::ValidatePhase};
use crudgen_schema::Schema;
use eyre::{Context, Result};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to the schema file (.json, or .toml)
    pub schema: PathBuf,

    /// Print the lowered application model as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.schema).unwrap_or_exit();
        let pipeline = Pipeline::new();
        let mut ctx = pipeline.run(schema).unwrap_or_exit();
        let ir = ctx.take_ir();

        if self.json {
            let json = serde_json::to_string_pretty(&ir).wrap_err("Failed to serialize IR")?;
            println!("{}", json);
            return Ok(());
        }

        println!("crudgen Pipeline Explanation");
        println!("============================");
        println!();

        println!("Input: {}", self.schema.display());
        println!("  App name: {}", ir.meta.name);
        println!();

        println!("Pipeline Phases:");
        for (i, phase) in pipeline.phase_info().iter().enumerate() {
            println!("  {}. {} - {}", i + 1, phase.name, phase.description);
        }
        println!();

        println!("Validation Lints:");
        for lint in ValidatePhase::new().lint_info() {
            println!("  - {}: {}", lint.name, lint.description);
        }
        println!();

        println!("Tables:");
        for table in &ir.tables {
            println!("  {}", crudgen_codegen::sql::create_table(table));
        }
        println!();

        println!("Handlers:");
        for handler in &ir.handlers {
            println!(
                "  {:<6} {} -> {}",
                handler.method.as_str(),
                handler.path,
                handler.table()
            );
        }

        if !ctx.diagnostics.is_empty() {
            println!();
            println!("Diagnostics:");
            for diag in &ctx.diagnostics {
                println!("  {}", diag);
            }
        }

        Ok(())
    }
}
