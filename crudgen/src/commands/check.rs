use std::path::PathBuf;

use clap::Args;
use crudgen_codegen::pipeline::Pipeline;
use crudgen_schema::Schema;
use eyre::Result;

use super::{UnwrapOrExit, print_diagnostics};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the schema file (.json, or .toml)
    pub schema: PathBuf,

    /// Reject model and field names that are not plain identifiers
    #[arg(long)]
    pub strict: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.schema).unwrap_or_exit();
        let mut ctx = Pipeline::new()
            .strict_identifiers(self.strict)
            .run(schema)
            .unwrap_or_exit();

        print_diagnostics(&ctx);
        if !ctx.diagnostics.is_empty() {
            println!();
        }

        println!("✓ {} is valid\n", self.schema.display());

        let ir = ctx.take_ir();
        println!("  {}\n", ir.meta.name);

        println!(
            "  {} model{}:",
            ir.tables.len(),
            if ir.tables.len() == 1 { "" } else { "s" }
        );
        for table in &ir.tables {
            let columns = table
                .columns
                .iter()
                .map(|c| format!("{}: {}", c.name, c.ty))
                .collect::<Vec<_>>()
                .join(", ");
            println!("    {} ({})", table.name, columns);
        }

        println!(
            "\n  {} handler{}:",
            ir.handlers.len(),
            if ir.handlers.len() == 1 { "" } else { "s" }
        );
        for handler in &ir.handlers {
            println!("    {:<6} {}", handler.method.as_str(), handler.path);
        }

        Ok(())
    }
}
