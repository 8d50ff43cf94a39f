//! Explain operation - traversal plan without output.

use beancopy_codegen::{GenerateError, GeneratorConfig};
use beancopy_schema::SchemaRegistry;

use crate::reports::ExplainReport;

/// Plan the run for `(source, destination)` and describe it.
pub fn explain(
    registry: &SchemaRegistry,
    config: &GeneratorConfig,
    source: &str,
    destination: &str,
    verbose: bool,
) -> Result<ExplainReport, GenerateError> {
    let unit = super::generate(registry, config, source, destination)?;
    Ok(ExplainReport {
        source: source.to_string(),
        destination: destination.to_string(),
        order: config.order,
        enum_check: config.enum_check,
        unit,
        verbose,
    })
}
