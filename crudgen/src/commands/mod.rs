mod check;
mod completions;
mod explain;
mod generate;
mod init;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use crudgen_codegen::pipeline::{CompilationContext, Severity};
use eyre::Result;
use explain::ExplainCommand;
use generate::GenerateCommand;
use init::InitCommand;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crudgen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for crudgen_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

/// Print pipeline diagnostics; warnings go to stderr.
pub(crate) fn print_diagnostics(ctx: &CompilationContext) {
    for diag in &ctx.diagnostics {
        let location = diag
            .location
            .as_ref()
            .map(|loc| format!("\n  --> {}", loc))
            .unwrap_or_default();

        match diag.severity {
            Severity::Warning => eprintln!("warning: {}{}", diag.message, location),
            Severity::Info => println!("info: {}{}", diag.message, location),
        }
    }
}

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "Generate Express + SQLite CRUD backends from a schema")]
pub(crate) struct Cli {
    /// Show debug logs (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a backend from a schema file
    Generate(GenerateCommand),

    /// Validate a schema without generating code
    Check(CheckCommand),

    /// Show the pipeline and the lowered application model
    Explain(ExplainCommand),

    /// Write an example schema to start from
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
