use std::{io, path::PathBuf};

use beancopy_core::{FileSink, OutputSink, Overwrite, PreviewSink};
use beancopy_schema::SchemaRegistry;
use clap::Args;
use eyre::Result;

use super::{
    UnwrapOrExit,
    args::{GeneratorArgs, RootArgs, SchemaArgs},
};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub roots: RootArgs,

    #[command(flatten)]
    pub schemas: SchemaArgs,

    #[command(flatten)]
    pub options: GeneratorArgs,

    /// Output file (defaults to the config's `output`, then <ClassName>.java)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the generated class instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Leave an existing output file untouched
    #[arg(long)]
    pub keep_existing: bool,
}

impl GenerateCommand {
    pub fn run(&self, verbose: u8) -> Result<()> {
        let registry = SchemaRegistry::from_files(&self.schemas.schemas).unwrap_or_exit();
        let config = self.options.load().unwrap_or_exit();

        let unit = ops::generate(
            &registry,
            &config,
            &self.roots.source,
            &self.roots.destination,
        )
        .unwrap_or_exit();

        let path = self
            .output
            .clone()
            .unwrap_or_else(|| config.output_path());
        let overwrite = if self.keep_existing {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        };

        let mut file_sink;
        let mut preview_sink;
        let sink: &mut dyn OutputSink = if self.dry_run {
            preview_sink = PreviewSink::new(io::stdout());
            &mut preview_sink
        } else {
            file_sink = FileSink::new();
            &mut file_sink
        };

        let report = ops::write_unit(&unit, &path, overwrite, sink, verbose > 0)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
