//! Explain command report data structures.

use beancopy_codegen::{EnumCheck, FieldPlan, GeneratedUnit, TraversalOrder};
use serde::Serialize;

use super::{
    diagnostics::render_diagnostics,
    output::{Output, Report},
};

/// The traversal plan of a run: pairs in processing order and per-field strategies.
#[derive(Debug, Serialize)]
pub struct ExplainReport {
    pub source: String,
    pub destination: String,
    pub order: TraversalOrder,
    pub enum_check: EnumCheck,
    pub unit: GeneratedUnit,
    /// Show info-level diagnostics.
    #[serde(skip)]
    pub verbose: bool,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Transformer Plan");
        out.newline();

        let class = if self.unit.package.is_empty() {
            self.unit.class_name.clone()
        } else {
            format!("{}.{}", self.unit.package, self.unit.class_name)
        };
        out.key_value("Class", &class);
        out.key_value("Roots", &format!("{} -> {}", self.source, self.destination));
        out.key_value("Order", &self.order.to_string());
        out.key_value("Enum check", &self.enum_check.to_string());
        out.newline();

        out.section("Routines");
        for (i, routine) in self.unit.routines.iter().enumerate() {
            out.numbered_item(i + 1, &routine.pair.to_string());
            for plan in &routine.fields {
                out.detail(&format!(
                    "{:<16} {:<15} {}",
                    plan.field(),
                    plan.strategy().to_string(),
                    describe(plan)
                ));
            }
        }

        if !self.unit.imports.is_empty() {
            out.newline();
            out.section("Imports");
            for import in &self.unit.imports {
                out.list_item(import);
            }
        }

        if !self.unit.diagnostics.is_empty() {
            out.newline();
        }
        render_diagnostics(out, &self.unit.diagnostics, self.verbose);
    }
}

fn describe(plan: &FieldPlan) -> String {
    match plan {
        FieldPlan::Skip { .. } => "not in destination".to_string(),
        FieldPlan::Unresolved { reason, .. } => reason.clone(),
        FieldPlan::Direct { getter, setter, .. } => format!("{}() -> {}()", getter, setter),
        FieldPlan::List {
            getter,
            target_getter,
            ..
        } => format!("{}() -> {}().addAll", getter, target_getter),
        FieldPlan::ListRecursive {
            getter, element, ..
        } => format!("{}() each via {}", getter, element),
        FieldPlan::ListEnum { getter, target, .. } => {
            format!("{}() each -> {}.valueOf", getter, target)
        }
        FieldPlan::Enum { getter, target, .. } => {
            format!("{}() -> {}.valueOf", getter, target)
        }
        FieldPlan::Recursive { getter, pair, .. } => format!("{}() via {}", getter, pair),
    }
}

#[cfg(test)]
mod tests {
    use beancopy_codegen::{Routine, TypePair};

    use super::*;
    use crate::reports::output::BufferOutput;

    fn report() -> ExplainReport {
        ExplainReport {
            source: "a.Order".into(),
            destination: "b.Order".into(),
            order: TraversalOrder::Lifo,
            enum_check: EnumCheck::Warn,
            unit: GeneratedUnit {
                package: "com.example".into(),
                class_name: "JaxbTransformer".into(),
                generated_at: None,
                imports: vec!["b.Order".into()],
                routines: vec![Routine {
                    pair: TypePair::new("a.Order", "b.Order"),
                    fields: vec![
                        FieldPlan::Direct {
                            field: "id".into(),
                            getter: "getId".into(),
                            setter: "setId".into(),
                        },
                        FieldPlan::Recursive {
                            field: "address".into(),
                            getter: "getAddress".into(),
                            setter: "setAddress".into(),
                            pair: TypePair::new("a.Address", "b.Address"),
                        },
                    ],
                    text: String::new(),
                }],
                diagnostics: Vec::new(),
            },
            verbose: false,
        }
    }

    #[test]
    fn test_render() {
        let mut out = BufferOutput::default();
        report().render(&mut out);
        let text = out.text();

        assert!(text.starts_with("# Transformer Plan\n\nClass: com.example.JaxbTransformer\n"));
        assert!(text.contains("1. a.Order -> b.Order"));
        assert!(text.contains("id               direct          getId() -> setId()"));
        assert!(text.contains("address          recursive       getAddress() via a.Address -> b.Address"));
        assert!(text.ends_with("Imports:\n- b.Order"));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["order"], "lifo");
        assert_eq!(json["enum_check"], "warn");
        assert_eq!(json["unit"]["routines"][0]["fields"][1]["strategy"], "recursive");
        assert!(json.get("verbose").is_none());
    }
}
