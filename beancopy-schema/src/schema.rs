use std::{collections::HashSet, path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{DeclaredType, Error, MethodSignature, Result, validate::ParseContext};

/// Root of one schema description file.
///
/// ```toml
/// [types."com.acme.v1.Order"]
/// accessors = "bean"
/// fields = [
///   { name = "qty", type = "int", xml-name = "quantity" },
/// ]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    /// Declared types keyed by qualified (binary) name, in file order
    #[serde(default)]
    pub types: IndexMap<String, TypeDef>,
}

/// Whether a declared type is a plain class or an enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Enum,
}

/// How a type's accessor methods are described.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorStyle {
    /// Only the methods listed under `methods` exist
    #[default]
    Declared,
    /// Standard bean accessors are derived from field names, plus `methods`
    Bean,
}

/// One `[types."..."]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TypeDef {
    #[serde(default)]
    pub kind: TypeKind,

    #[serde(default)]
    pub accessors: AccessorStyle,

    /// Whether `new T()` is available
    #[serde(default = "default_true")]
    pub default_constructor: bool,

    #[serde(default)]
    pub fields: Vec<FieldDef>,

    #[serde(default)]
    pub methods: Vec<MethodSignature>,

    /// Enum constants in declaration order
    #[serde(default)]
    pub constants: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// A declared field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FieldDef {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: DeclaredType,

    /// Binding alias (`@XmlElement(name = ...)`)
    #[serde(default)]
    pub xml_name: Option<String>,
}

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "schema.toml")
    }
}

impl Schema {
    /// Parse a schema description file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a schema description from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = ParseContext::new(content, filename);
        let schema: Self =
            toml::from_str(content).map_err(|e| ctx.source_context().parse_error(e))?;
        schema.validate(&ctx)?;
        Ok(schema)
    }

    /// Validate the schema after parsing
    fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        for (name, def) in &self.types {
            ctx.validate_qualified_name(name, "type")?;

            let type_ctx = ctx.push(name);
            def.validate(name, &type_ctx)?;
        }
        Ok(())
    }
}

impl TypeDef {
    fn validate(&self, owner: &str, ctx: &ParseContext<'_>) -> Result<()> {
        let source = ctx.source_context();
        let type_span = crate::validate::find_type_span(ctx.src(), owner);

        match self.kind {
            TypeKind::Enum => {
                if self.constants.is_empty() {
                    return Err(source.validation_error(
                        format!("enum '{}' declares no constants", owner),
                        type_span,
                    ));
                }
                if !self.fields.is_empty() {
                    return Err(source.validation_error(
                        format!("enum '{}' cannot declare fields", owner),
                        type_span,
                    ));
                }
                for constant in &self.constants {
                    ctx.validate_name(constant, "enum constant")?;
                }
                check_unique(ctx, owner, "constant", self.constants.iter().map(String::as_str))?;
            }
            TypeKind::Class => {
                if !self.constants.is_empty() {
                    return Err(source.validation_error(
                        format!("'{}' declares constants but is not an enum", owner),
                        type_span,
                    ));
                }
                for field in &self.fields {
                    ctx.validate_name(&field.name, "field")?;
                    if let Some(alias) = &field.xml_name {
                        ctx.validate_name(alias, "xml-name")?;
                    }
                }
                check_unique(ctx, owner, "field", self.fields.iter().map(|f| f.name.as_str()))?;
            }
        }

        for method in &self.methods {
            ctx.validate_name(method.name(), "method")?;
        }

        Ok(())
    }
}

fn check_unique<'a>(
    ctx: &ParseContext<'_>,
    owner: &str,
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            let spans = ctx.find_quoted_spans(name);
            let source = ctx.source_context();
            return Err(match (spans.first(), spans.get(1)) {
                (Some(first), Some(second)) => {
                    source.duplicate_error(kind, name, owner, *first, *second)
                }
                _ => source.validation_error(
                    format!("duplicate {} '{}' in '{}'", kind, name, owner),
                    spans.first().copied(),
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_class_and_enum() {
        let schema = Schema::from_str(
            r#"
            [types."com.acme.Order"]
            accessors = "bean"
            fields = [
              { name = "id", type = "java.lang.String" },
              { name = "qty", type = "int", xml-name = "quantity" },
              { name = "lines", type = "java.util.List<com.acme.Line>" },
            ]
            methods = ["getQuantity()"]

            [types."com.acme.Color"]
            kind = "enum"
            constants = ["RED", "GREEN"]
            "#,
        )
        .unwrap();

        let order = &schema.types["com.acme.Order"];
        assert_eq!(order.kind, TypeKind::Class);
        assert_eq!(order.accessors, AccessorStyle::Bean);
        assert!(order.default_constructor);
        assert_eq!(order.fields.len(), 3);
        assert_eq!(order.fields[1].xml_name.as_deref(), Some("quantity"));
        assert!(order.fields[2].ty.is_list());
        assert_eq!(order.methods[0].name(), "getQuantity");

        let color = &schema.types["com.acme.Color"];
        assert_eq!(color.kind, TypeKind::Enum);
        assert_eq!(color.constants, vec!["RED", "GREEN"]);
    }

    #[test]
    fn test_types_keep_file_order() {
        let schema = Schema::from_str(
            r#"
            [types."z.Last"]
            [types."a.First"]
            [types."m.Middle"]
            "#,
        )
        .unwrap();
        let names: Vec<&str> = schema.types.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["z.Last", "a.First", "m.Middle"]);
    }

    #[test]
    fn test_malformed_type_is_parse_error() {
        let err = Schema::from_str(
            r#"
            [types."com.acme.Order"]
            fields = [{ name = "lines", type = "java.util.List<" }]
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Schema::from_str(
            r#"
            [types."com.acme.Order"]
            feilds = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = Schema::from_str(
            r#"
            [types."com.acme.Order"]
            fields = [
              { name = "id", type = "int" },
              { name = "id", type = "long" },
            ]
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Duplicate { kind: "field", .. }));
    }

    #[test]
    fn test_enum_without_constants_rejected() {
        let err = Schema::from_str(
            r#"
            [types."com.acme.Color"]
            kind = "enum"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("declares no constants"));
    }

    #[test]
    fn test_enum_with_fields_rejected() {
        let err = Schema::from_str(
            r#"
            [types."com.acme.Color"]
            kind = "enum"
            constants = ["RED"]
            fields = [{ name = "rgb", type = "int" }]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("cannot declare fields"));
    }

    #[test]
    fn test_keyword_field_rejected() {
        let err = Schema::from_str(
            r#"
            [types."com.acme.Order"]
            fields = [{ name = "class", type = "int" }]
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_invalid_type_name_rejected() {
        let err = Schema::from_str(
            r#"
            [types."com.acme.9Order"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }
}
