//! Generate operation - transformer generation and output.

use std::path::Path;

use beancopy_codegen::{GenerateError, GeneratedUnit, Generator, GeneratorConfig};
use beancopy_core::{FileRules, OutputSink, Overwrite};
use beancopy_schema::SchemaRegistry;
use eyre::{Context, Result};
use tracing::info;

use crate::reports::GenerateReport;

/// Run the generator for one pair of root types.
pub fn generate(
    registry: &SchemaRegistry,
    config: &GeneratorConfig,
    source: &str,
    destination: &str,
) -> std::result::Result<GeneratedUnit, GenerateError> {
    info!(types = registry.len(), source, destination, "loaded schemas");
    Generator::new(registry, config.clone()).generate(source, destination)
}

/// Hand the rendered unit to `sink` at `path`.
pub fn write_unit(
    unit: &GeneratedUnit,
    path: &Path,
    overwrite: Overwrite,
    sink: &mut dyn OutputSink,
    verbose: bool,
) -> Result<GenerateReport> {
    let file = unit.to_file(path).with_rules(FileRules { overwrite });
    let result = sink
        .accept(&file)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

    let class = if unit.package.is_empty() {
        unit.class_name.clone()
    } else {
        format!("{}.{}", unit.package, unit.class_name)
    };

    Ok(GenerateReport {
        class,
        path: path.to_path_buf(),
        result,
        routines: unit.routines.len(),
        diagnostics: unit.diagnostics.clone(),
        verbose,
    })
}
