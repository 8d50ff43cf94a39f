use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, args::SchemaArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub schemas: SchemaArgs,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::check(&self.schemas.schemas).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
