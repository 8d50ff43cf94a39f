//! Immutable type and field descriptors handed to the generator.

use beancopy_core::{accessor_name, canonical_name, short_name};

use crate::{AccessorStyle, DeclaredType, MethodSignature, TypeDef, TypeKind};

/// A declared field of a [`TypeDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    ty: DeclaredType,
    xml_name: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: DeclaredType, xml_name: Option<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            xml_name,
        }
    }

    /// In-memory field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared (generic) type.
    pub fn ty(&self) -> &DeclaredType {
        &self.ty
    }

    /// Binding alias, if the field carries one.
    pub fn xml_name(&self) -> Option<&str> {
        self.xml_name.as_deref()
    }
}

/// A model type as seen through the registry.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    qualified_name: String,
    kind: TypeKind,
    fields: Vec<FieldDescriptor>,
    methods: Vec<MethodSignature>,
    constants: Vec<String>,
    default_constructor: bool,
    origin: String,
}

impl TypeDescriptor {
    /// Build a descriptor from a parsed `[types."..."]` table.
    ///
    /// With [`AccessorStyle::Bean`], `get`/`is`/`set` accessors are derived for
    /// every field before the declared methods; list fields get no setter.
    pub fn from_def(qualified_name: &str, def: &TypeDef, origin: &str) -> Self {
        let fields: Vec<FieldDescriptor> = def
            .fields
            .iter()
            .map(|f| FieldDescriptor::new(&f.name, f.ty.clone(), f.xml_name.clone()))
            .collect();

        let mut methods = Vec::new();
        if def.accessors == AccessorStyle::Bean {
            for field in &fields {
                let prefix = if field.ty.is_boolean() { "is" } else { "get" };
                methods.push(MethodSignature::new(
                    accessor_name(prefix, &field.name),
                    Vec::new(),
                ));
                if !field.ty.is_list() {
                    methods.push(MethodSignature::new(
                        accessor_name("set", &field.name),
                        vec![field.ty.clone()],
                    ));
                }
            }
        }
        for method in &def.methods {
            if !methods.contains(method) {
                methods.push(method.clone());
            }
        }

        Self {
            qualified_name: qualified_name.to_string(),
            kind: def.kind,
            fields,
            methods,
            constants: def.constants.clone(),
            default_constructor: def.default_constructor && def.kind == TypeKind::Class,
            origin: origin.to_string(),
        }
    }

    /// Binary qualified name (`com.acme.Order$Line`).
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Simple name (`Line`).
    pub fn short_name(&self) -> &str {
        short_name(&self.qualified_name)
    }

    /// Source-level qualified name (`com.acme.Order.Line`).
    pub fn canonical_name(&self) -> String {
        canonical_name(&self.qualified_name)
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look up a declared field by exact name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn methods(&self) -> &[MethodSignature] {
        &self.methods
    }

    /// Whether a zero-argument method with this name exists.
    pub fn has_getter(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.is_getter_named(name))
    }

    /// Whether a one-argument method with this name accepting `param` exists.
    pub fn has_setter(&self, name: &str, param: &DeclaredType) -> bool {
        self.methods.iter().any(|m| m.is_setter_named(name, param))
    }

    /// Enum constants in declaration order (empty for classes).
    pub fn constants(&self) -> &[String] {
        &self.constants
    }

    pub fn has_constant(&self, name: &str) -> bool {
        self.constants.iter().any(|c| c == name)
    }

    /// Whether `new T()` compiles. Always false for enums.
    pub fn has_default_constructor(&self) -> bool {
        self.default_constructor
    }

    /// Schema file the type was declared in.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::Schema;

    fn descriptor(toml: &str, name: &str) -> TypeDescriptor {
        let schema = Schema::from_str(toml).unwrap();
        TypeDescriptor::from_def(name, &schema.types[name], "test.toml")
    }

    #[test]
    fn test_bean_accessors_are_derived() {
        let order = descriptor(
            r#"
            [types."com.acme.Order"]
            accessors = "bean"
            fields = [
              { name = "id", type = "java.lang.String" },
              { name = "paid", type = "boolean" },
              { name = "lines", type = "java.util.List<com.acme.Line>" },
            ]
            "#,
            "com.acme.Order",
        );

        assert!(order.has_getter("getId"));
        assert!(order.has_setter("setId", &DeclaredType::named("java.lang.String")));
        assert!(order.has_getter("isPaid"));
        assert!(!order.has_getter("getPaid"));
        assert!(order.has_setter("setPaid", &DeclaredType::named("boolean")));
        assert!(order.has_getter("getLines"));
        assert!(!order.methods().iter().any(|m| m.name() == "setLines"));
    }

    #[test]
    fn test_declared_accessors_only() {
        let order = descriptor(
            r#"
            [types."com.acme.Order"]
            fields = [{ name = "qty", type = "int", xml-name = "quantity" }]
            methods = ["getQuantity()", "setQuantity(int)"]
            "#,
            "com.acme.Order",
        );

        assert!(!order.has_getter("getQty"));
        assert!(order.has_getter("getQuantity"));
        assert!(order.has_setter("setQuantity", &DeclaredType::named("int")));
        assert!(!order.has_setter("setQuantity", &DeclaredType::named("long")));
        assert_eq!(order.field("qty").unwrap().xml_name(), Some("quantity"));
    }

    #[test]
    fn test_names() {
        let line = descriptor(
            r#"
            [types."com.acme.Order$Line"]
            default-constructor = false
            "#,
            "com.acme.Order$Line",
        );

        assert_eq!(line.short_name(), "Line");
        assert_eq!(line.canonical_name(), "com.acme.Order.Line");
        assert!(!line.has_default_constructor());
        assert_eq!(line.origin(), "test.toml");
    }

    #[test]
    fn test_enum_descriptor() {
        let color = descriptor(
            r#"
            [types."com.acme.Color"]
            kind = "enum"
            constants = ["RED", "GREEN"]
            "#,
            "com.acme.Color",
        );

        assert!(color.is_enum());
        assert!(!color.has_default_constructor());
        assert!(color.has_constant("RED"));
        assert!(!color.has_constant("BLUE"));
    }
}
