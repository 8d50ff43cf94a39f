use beancopy_schema::SchemaRegistry;
use clap::Args;
use eyre::{Context, Result};

use super::{
    UnwrapOrExit,
    args::{GeneratorArgs, RootArgs, SchemaArgs},
};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    #[command(flatten)]
    pub roots: RootArgs,

    #[command(flatten)]
    pub schemas: SchemaArgs,

    #[command(flatten)]
    pub options: GeneratorArgs,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExplainCommand {
    pub fn run(&self, verbose: u8) -> Result<()> {
        let registry = SchemaRegistry::from_files(&self.schemas.schemas).unwrap_or_exit();
        let config = self.options.load().unwrap_or_exit();

        let report = ops::explain(
            &registry,
            &config,
            &self.roots.source,
            &self.roots.destination,
            verbose > 0,
        )
        .unwrap_or_exit();

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize plan")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
