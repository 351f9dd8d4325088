use std::path::PathBuf;

use clap::Args;
use crudgen_codegen::{BackendCodegen, pipeline::Pipeline};
use crudgen_codegen_express::Generator;
use crudgen_core::FsSink;
use crudgen_schema::Schema;
use eyre::{Context, Result};

use super::{UnwrapOrExit, print_diagnostics};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the schema file (.json, or .toml)
    pub schema: PathBuf,

    /// Root directory; the app is generated into <output>/<appName>
    #[arg(short, long, env = "CRUDGEN_OUTPUT", default_value = "generated_apps")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Also create a package.json (never overwritten once it exists)
    #[arg(long)]
    pub package_json: bool,

    /// Reject model and field names that are not plain identifiers
    #[arg(long)]
    pub strict: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.schema).unwrap_or_exit();
        tracing::debug!(schema = %self.schema.display(), app = %schema.app_name, "loaded schema");
        let ctx = Pipeline::new()
            .strict_identifiers(self.strict)
            .run(schema)
            .unwrap_or_exit();

        print_diagnostics(&ctx);

        let generator = Generator::from_context(ctx).with_package_json(self.package_json);

        if self.dry_run {
            self.run_preview(&generator);
            Ok(())
        } else {
            self.run_generation(&generator)
        }
    }

    fn run_generation(&self, generator: &Generator) -> Result<()> {
        let result = generator
            .generate(&mut FsSink::new(), &self.output)
            .wrap_err("Failed to write generated files")?;
        tracing::info!(
            output = %result.output_dir.display(),
            written = result.written.len(),
            skipped = result.skipped.len(),
            "generation finished"
        );

        let ir = generator.ir();
        println!(
            "{} ({} table{}, {} handler{})",
            ir.meta.name,
            ir.tables.len(),
            plural(ir.tables.len()),
            ir.handlers.len(),
            plural(ir.handlers.len())
        );
        println!();

        println!("Generated: {}/", result.output_dir.display());
        for file in &result.written {
            println!("  + {}", file);
        }
        for file in &result.skipped {
            println!("  = {} (exists, kept)", file);
        }

        println!();
        println!("Next:");
        println!("  cd {}", result.output_dir.display());
        println!("  npm install express sqlite sqlite3");
        println!("  node server.js");

        Ok(())
    }

    fn run_preview(&self, generator: &Generator) {
        let artifacts = generator.artifacts();
        tracing::debug!(files = artifacts.len(), "dry run, nothing written");

        for artifact in &artifacts {
            println!("── {} ──", artifact.filename());
            println!("{}", artifact.content());
        }

        println!("── Summary ──");
        println!(
            "{} files would be generated in {}",
            artifacts.len(),
            self.output.join(generator.app_name()).display()
        );
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
