//! Builtin (runtime) type classification.

use beancopy_schema::{DeclaredType, PRIMITIVES};

/// Packages whose types are copied by reference instead of converted.
pub const DEFAULT_BUILTIN_PACKAGES: &[&str] =
    &["java.lang", "java.util", "java.math", "java.time", "javax.xml"];

/// Decides whether a declared type is a runtime type or a model type.
///
/// Builtin types are primitives, arrays of builtins and anything under one of
/// the configured package prefixes. Everything else needs a generated routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinTypes {
    packages: Vec<String>,
}

impl BuiltinTypes {
    pub fn new(packages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// Classify a declared type. Array dimensions are ignored, so `byte[]`
    /// and `java.lang.String[][]` are builtin while `com.acme.Line[]` is not.
    pub fn is_builtin(&self, ty: &DeclaredType) -> bool {
        PRIMITIVES.contains(&ty.raw()) || self.is_builtin_name(ty.raw())
    }

    /// Prefix match on a qualified name; `java.util` matches
    /// `java.util.List` but not `java.utility.Foo`.
    pub fn is_builtin_name(&self, qualified_name: &str) -> bool {
        self.packages.iter().any(|package| {
            qualified_name
                .strip_prefix(package.as_str())
                .is_some_and(|rest| rest.starts_with('.'))
        })
    }
}

impl Default for BuiltinTypes {
    fn default() -> Self {
        Self::new(DEFAULT_BUILTIN_PACKAGES.iter().copied())
    }
}
