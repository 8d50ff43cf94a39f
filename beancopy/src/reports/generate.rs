//! Generate command report data structures.

use std::path::PathBuf;

use beancopy_codegen::{Diagnostic, Severity};
use beancopy_core::WriteResult;

use super::{
    diagnostics::{plural, render_diagnostics},
    output::{Output, Report},
};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Fully qualified name of the generated class.
    pub class: String,
    pub path: PathBuf,
    pub result: WriteResult,
    pub routines: usize,
    pub diagnostics: Vec<Diagnostic>,
    /// Show info-level diagnostics.
    pub verbose: bool,
}

impl GenerateReport {
    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics, self.verbose);

        let summary = format!(
            "{}, {}, {}",
            plural(self.routines, "routine"),
            plural(self.count(Severity::Error), "field error"),
            plural(self.count(Severity::Warning), "warning"),
        );

        match self.result {
            WriteResult::Written => {
                out.preformatted(&format!("Generated {} ({})", self.class, summary));
                out.added_item(&self.path.display().to_string());
            }
            WriteResult::Skipped => {
                out.warning(&format!(
                    "{} already exists, not overwritten",
                    self.path.display()
                ));
            }
            WriteResult::Previewed => {
                out.newline();
                out.preformatted(&format!("── Summary ── {} ({})", self.class, summary));
            }
        }
    }
}
