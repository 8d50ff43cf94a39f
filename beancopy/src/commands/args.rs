//! Arguments shared by several subcommands.

use std::path::{Path, PathBuf};

use beancopy_codegen::{ConfigError, EnumCheck, GeneratorConfig, TraversalOrder};
use clap::Args;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "beancopy.toml";

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Schema description file (repeatable); all files form one registry
    #[arg(short, long = "schema", value_name = "FILE", required = true)]
    pub schemas: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RootArgs {
    /// Qualified name of the source root type
    pub source: String,

    /// Qualified name of the destination root type
    pub destination: String,
}

#[derive(Args, Debug, Default)]
pub struct GeneratorArgs {
    /// Path to beancopy.toml (defaults to ./beancopy.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Package of the generated class
    #[arg(long)]
    pub package: Option<String>,

    /// Name of the generated class
    #[arg(long)]
    pub class_name: Option<String>,

    /// Work-list order: lifo or fifo
    #[arg(long)]
    pub order: Option<TraversalOrder>,

    /// Enum constant check: warn, strict or lazy
    #[arg(long)]
    pub enum_check: Option<EnumCheck>,

    /// Omit the "Generated on" header
    #[arg(long)]
    pub no_timestamp: bool,
}

impl GeneratorArgs {
    /// Load the config file (if any) and apply command-line overrides.
    pub fn load(&self) -> Result<GeneratorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG).is_file() => GeneratorConfig::from_file(DEFAULT_CONFIG)?,
            None => GeneratorConfig::default(),
        };

        if let Some(package) = &self.package {
            config.package = package.clone();
        }
        if let Some(class_name) = &self.class_name {
            config.class_name = class_name.clone();
        }
        if let Some(order) = self.order {
            config.order = order;
        }
        if let Some(enum_check) = self.enum_check {
            config.enum_check = enum_check;
        }
        if self.no_timestamp {
            config.timestamp = false;
        }

        config.validate()?;
        Ok(config)
    }
}
