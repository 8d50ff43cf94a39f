//! Check command report data structures.

use std::path::PathBuf;

use super::{
    diagnostics::plural,
    output::{Output, Report},
};

/// One declared type, as listed by `beancopy check`.
#[derive(Debug)]
pub struct TypeSummary {
    /// Source-level qualified name.
    pub name: String,
    /// `class` or `enum`.
    pub kind: &'static str,
    /// Field count for classes, constant count for enums.
    pub members: usize,
}

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    pub schemas: Vec<PathBuf>,
    pub types: Vec<TypeSummary>,
    /// Declarations that parse but would fail generation.
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        for schema in &self.schemas {
            out.preformatted(&format!("✓ {} is valid", schema.display()));
        }
        out.newline();

        out.section(&plural(self.types.len(), "type"));
        for ty in &self.types {
            let members = match ty.kind {
                "enum" => plural(ty.members, "constant"),
                _ => plural(ty.members, "field"),
            };
            out.list_item(&format!("{} ({}, {})", ty.name, ty.kind, members));
        }
    }
}
