//! Java text for one conversion routine.

use crate::{
    FieldPlan, SymbolTable, TypePair,
    builder::{CodeBuilder, Indent},
};

/// Renders routines as members of the generated class.
///
/// Every type reference goes through the [`SymbolTable`], so the order of
/// calls here decides which of two same-named types gets the short name:
/// destination, source, then field statements top to bottom.
#[derive(Debug, Clone, Copy)]
pub struct RoutineEmitter {
    indent: Indent,
}

impl RoutineEmitter {
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }

    pub fn render(&self, symbols: &mut SymbolTable, pair: &TypePair, plans: &[FieldPlan]) -> String {
        let dst = symbols.display(&pair.destination);
        let src = symbols.display(&pair.source);

        let mut code = CodeBuilder::new(self.indent).at_level(1);
        code.push_line(&format!("public {} transform({} a) {{", dst, src))
            .push_indent()
            .push_line("if (a == null)")
            .push_indent()
            .push_line("return null;")
            .push_dedent()
            .push_blank()
            .push_line(&format!("{0} r = new {0}();", dst));

        for plan in plans {
            render_field(&mut code, symbols, plan);
        }

        code.push_line("return r;")
            .push_dedent()
            .push_line("}")
            .push_blank();
        code.build()
    }
}

fn render_field(code: &mut CodeBuilder, symbols: &mut SymbolTable, plan: &FieldPlan) {
    match plan {
        FieldPlan::Skip { field } => {
            code.push_comment(&format!("r.{} not found", field));
        }
        FieldPlan::Unresolved { field, reason } => {
            code.push_comment(&format!("r.{} skipped: {}", field, reason));
        }
        FieldPlan::Direct { getter, setter, .. } => {
            code.push_line(&format!("r.{}(a.{}());", setter, getter));
        }
        FieldPlan::List {
            getter,
            target_getter,
            ..
        } => {
            code.push_line(&format!("r.{}().addAll(a.{}());", target_getter, getter));
        }
        FieldPlan::ListRecursive {
            getter,
            target_getter,
            element,
            ..
        } => {
            let element = symbols.display(&element.source);
            code.push_line(&format!("for ({} i : a.{}())", element, getter))
                .push_indent()
                .push_line(&format!("r.{}().add(transform(i));", target_getter))
                .push_dedent()
                .push_blank();
        }
        FieldPlan::ListEnum {
            getter,
            target_getter,
            element,
            target,
            ..
        } => {
            let element = symbols.display(element);
            let target = symbols.display(target);
            code.push_line(&format!("for ({} i : a.{}())", element, getter))
                .push_indent()
                .push_line(&format!(
                    "r.{}().add(i == null ? null : {}.valueOf(i.name()));",
                    target_getter, target
                ))
                .push_dedent()
                .push_blank();
        }
        FieldPlan::Enum {
            getter,
            setter,
            target,
            ..
        } => {
            let target = symbols.display(target);
            code.push_line(&format!("if (a.{}() != null)", getter))
                .push_indent()
                .push_line(&format!(
                    "r.{}({}.valueOf(a.{}().name()));",
                    setter, target, getter
                ))
                .push_dedent()
                .push_blank();
        }
        FieldPlan::Recursive { getter, setter, .. } => {
            code.push_line(&format!("r.{}(transform(a.{}()));", setter, getter));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(plans: &[FieldPlan]) -> (String, SymbolTable) {
        let mut symbols = SymbolTable::new();
        let text = RoutineEmitter::new(Indent::JAVA).render(
            &mut symbols,
            &TypePair::new("com.acme.v1.Order", "com.acme.v2.Order"),
            plans,
        );
        (text, symbols)
    }

    #[test]
    fn test_null_guard_and_construction() {
        let (text, symbols) = render(&[]);
        assert_eq!(
            text,
            "  public Order transform(com.acme.v1.Order a) {\n    if (a == null)\n      return null;\n\n    Order r = new Order();\n    return r;\n  }\n\n"
        );
        assert!(symbols.is_bound("com.acme.v2.Order"));
        assert!(!symbols.is_bound("com.acme.v1.Order"));
    }

    #[test]
    fn test_field_statements() {
        let (text, symbols) = render(&[
            FieldPlan::Skip {
                field: "legacy".into(),
            },
            FieldPlan::Direct {
                field: "qty".into(),
                getter: "getQuantity".into(),
                setter: "setQuantity".into(),
            },
            FieldPlan::List {
                field: "tags".into(),
                getter: "getTags".into(),
                target_getter: "getTags".into(),
            },
            FieldPlan::ListRecursive {
                field: "lines".into(),
                getter: "getLines".into(),
                target_getter: "getLines".into(),
                element: TypePair::new("com.acme.v1.Line", "com.acme.v2.Line"),
            },
            FieldPlan::Enum {
                field: "color".into(),
                getter: "getColor".into(),
                setter: "setColor".into(),
                target: "com.acme.v2.Color".into(),
            },
            FieldPlan::Recursive {
                field: "address".into(),
                getter: "getAddress".into(),
                setter: "setAddress".into(),
                pair: TypePair::new("com.acme.v1.Address", "com.acme.v2.Address"),
            },
            FieldPlan::Unresolved {
                field: "note".into(),
                reason: "no getter for 'note' on 'com.acme.v1.Order' (tried getNote)".into(),
            },
        ]);

        let body: Vec<&str> = text.lines().skip(5).collect();
        assert_eq!(
            body,
            vec![
                "    // r.legacy not found",
                "    r.setQuantity(a.getQuantity());",
                "    r.getTags().addAll(a.getTags());",
                "    for (Line i : a.getLines())",
                "      r.getLines().add(transform(i));",
                "",
                "    if (a.getColor() != null)",
                "      r.setColor(Color.valueOf(a.getColor().name()));",
                "",
                "    r.setAddress(transform(a.getAddress()));",
                "    // r.note skipped: no getter for 'note' on 'com.acme.v1.Order' (tried getNote)",
                "    return r;",
                "  }",
                "",
            ]
        );
        assert_eq!(
            symbols.imports(),
            vec!["com.acme.v1.Line", "com.acme.v2.Color", "com.acme.v2.Order"]
        );
    }

    #[test]
    fn test_enum_list_statement() {
        let (text, symbols) = render(&[FieldPlan::ListEnum {
            field: "colors".into(),
            getter: "getColors".into(),
            target_getter: "getColors".into(),
            element: "com.acme.v1.Color".into(),
            target: "com.acme.v2.Color".into(),
        }]);

        let body: Vec<&str> = text.lines().skip(5).take(2).collect();
        assert_eq!(
            body,
            vec![
                "    for (Color i : a.getColors())",
                "      r.getColors().add(i == null ? null : com.acme.v2.Color.valueOf(i.name()));",
            ]
        );
        assert!(!text.contains("transform(i)"));
        assert_eq!(symbols.imports(), vec!["com.acme.v1.Color", "com.acme.v2.Order"]);
    }

    #[test]
    fn test_custom_indent() {
        let mut symbols = SymbolTable::new();
        let text = RoutineEmitter::new(Indent::Spaces(4)).render(
            &mut symbols,
            &TypePair::new("a.A", "b.B"),
            &[],
        );
        assert!(text.starts_with("    public B transform(A a) {\n        if (a == null)\n            return null;\n"));
    }
}
