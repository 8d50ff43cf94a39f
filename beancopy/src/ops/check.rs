//! Check operation - schema validation.

use std::path::PathBuf;

use beancopy_schema::{SchemaRegistry, TypeDescriptor};

use crate::reports::{CheckReport, TypeSummary};

/// Load every schema file into one registry and summarize its types.
///
/// Parse and validation failures are returned as errors; declarations that
/// only fail once generation reaches them become warnings.
pub fn check(schemas: &[PathBuf]) -> beancopy_schema::Result<CheckReport> {
    let registry = SchemaRegistry::from_files(schemas)?;

    let types = registry
        .types()
        .map(|ty| TypeSummary {
            name: ty.canonical_name(),
            kind: if ty.is_enum() { "enum" } else { "class" },
            members: if ty.is_enum() {
                ty.constants().len()
            } else {
                ty.fields().len()
            },
        })
        .collect();

    let warnings = registry.types().flat_map(lint).collect();

    Ok(CheckReport {
        schemas: schemas.to_vec(),
        types,
        warnings,
    })
}

fn lint(ty: &TypeDescriptor) -> Vec<String> {
    let mut warnings = Vec::new();
    for field in ty.fields() {
        if field.ty().is_list() && field.ty().args().len() != 1 {
            warnings.push(format!(
                "{}::{} is declared as '{}'; lists need exactly one type argument",
                ty.qualified_name(),
                field.name(),
                field.ty()
            ));
        }
    }
    if !ty.is_enum() && !ty.has_default_constructor() {
        warnings.push(format!(
            "{} has no zero-argument constructor and cannot be a destination type",
            ty.qualified_name()
        ));
    }
    warnings
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_check_summarizes_and_lints() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("model.toml");
        fs::write(
            &path,
            r#"
            [types."com.acme.Order"]
            default-constructor = false
            fields = [{ name = "lines", type = "java.util.List" }]

            [types."com.acme.Color"]
            kind = "enum"
            constants = ["RED", "GREEN"]
            "#,
        )
        .unwrap();

        let report = check(std::slice::from_ref(&path)).unwrap();

        assert_eq!(report.types.len(), 2);
        assert_eq!(report.types[0].kind, "class");
        assert_eq!(report.types[1].members, 2);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("com.acme.Order::lines"));
    }

    #[test]
    fn test_check_fails_on_invalid_schema() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[types.\"com.acme.Order\"]\nfields = 3\n").unwrap();

        assert!(check(&[path]).is_err());
    }
}
