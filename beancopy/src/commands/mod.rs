mod args;
mod check;
mod completions;
mod explain;
mod generate;

use beancopy_codegen::{ConfigError, GenerateError};
use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use explain::ExplainCommand;
use generate::GenerateCommand;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

fn exit_with(report: miette::Report) -> ! {
    eprintln!("{:?}", report);
    std::process::exit(1);
}

impl<T> UnwrapOrExit<T> for beancopy_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(*e)))
    }
}

impl<T> UnwrapOrExit<T> for std::result::Result<T, GenerateError> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(e)))
    }
}

impl<T> UnwrapOrExit<T> for std::result::Result<T, ConfigError> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(e)))
    }
}

#[derive(Parser)]
#[command(name = "beancopy")]
#[command(version)]
#[command(about = "Generate Java deep-copy transformers between two JAXB-style object models")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(self.verbose),
            Commands::Check(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(self.verbose),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the transformer class for a source and destination root type
    Generate(GenerateCommand),

    /// Validate schema description files
    Check(CheckCommand),

    /// Show the type pairs and per-field strategies without writing code
    Explain(ExplainCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
