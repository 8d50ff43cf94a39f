//! The finished compilation unit.

use std::path::Path;

use beancopy_core::File;
use serde::Serialize;

use crate::{Diagnostic, FieldPlan, TypePair, builder::CodeBuilder, diagnostic::Severity};

/// One generated `transform` overload.
#[derive(Debug, Clone, Serialize)]
pub struct Routine {
    pub pair: TypePair,
    /// Planned fields in source declaration order
    pub fields: Vec<FieldPlan>,
    /// Rendered Java, indented as a class member
    #[serde(skip)]
    pub text: String,
}

/// Result of a generation run: everything needed to write one `.java` file.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedUnit {
    pub package: String,
    pub class_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    /// Sorted import names
    pub imports: Vec<String>,
    /// Routines in the order their pairs were processed
    pub routines: Vec<Routine>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratedUnit {
    /// Full Java source text.
    pub fn render(&self) -> String {
        let mut code = CodeBuilder::java();
        if !self.package.is_empty() {
            code.push_line(&format!("package {};", self.package))
                .push_blank();
        }
        for import in &self.imports {
            code.push_line(&format!("import {};", import));
        }
        if !self.imports.is_empty() {
            code.push_blank();
        }
        if let Some(generated_at) = &self.generated_at {
            code.push_javadoc(&format!("Generated on {}", generated_at));
        }
        code.push_line(&format!("public class {} {{", self.class_name));

        let mut source = code.build();
        for routine in &self.routines {
            source.push_str(&routine.text);
        }
        source.push_str("}\n");
        source
    }

    /// The rendered unit as a file at `path`.
    pub fn to_file(&self, path: impl AsRef<Path>) -> File {
        File::new(path.as_ref(), self.render())
    }

    pub fn pairs(&self) -> impl Iterator<Item = &TypePair> {
        self.routines.iter().map(|r| &r.pair)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Whether any field was left unconverted.
    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }
}
