//! Short-name bindings for one generated compilation unit.

use std::collections::BTreeSet;

use beancopy_core::{canonical_name, package_of, short_name};
use indexmap::IndexMap;

/// Maps short names to the qualified type that claimed them first.
///
/// A binding is never revoked: a later type with the same short name is
/// always written fully qualified and never imported.
#[derive(Debug, Default)]
pub struct SymbolTable {
    bound: IndexMap<String, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text to write for a reference to `qualified_name`, binding its short
    /// name on first use.
    pub fn display(&mut self, qualified_name: &str) -> String {
        let short = short_name(qualified_name);
        match self.bound.get(short) {
            Some(owner) if owner == qualified_name => short.to_string(),
            Some(_) => canonical_name(qualified_name),
            None => {
                self.bound
                    .insert(short.to_string(), qualified_name.to_string());
                short.to_string()
            }
        }
    }

    #[cfg(test)]
    pub fn is_bound(&self, qualified_name: &str) -> bool {
        self.bound
            .get(short_name(qualified_name))
            .is_some_and(|owner| owner == qualified_name)
    }

    /// Bindings in the order they were made, as `(short, qualified)`.
    #[cfg(test)]
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bound.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sorted import names for every bound type outside the default package.
    pub fn imports(&self) -> Vec<String> {
        self.bound
            .values()
            .filter(|qualified| !package_of(qualified).is_empty())
            .map(|qualified| canonical_name(qualified))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.bound.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_binding_wins() {
        let mut symbols = SymbolTable::new();
        assert_eq!(symbols.display("com.acme.v1.Order"), "Order");
        assert_eq!(symbols.display("com.acme.v2.Order"), "com.acme.v2.Order");
        assert_eq!(symbols.display("com.acme.v1.Order"), "Order");
        assert_eq!(symbols.display("com.acme.v2.Order"), "com.acme.v2.Order");

        assert!(symbols.is_bound("com.acme.v1.Order"));
        assert!(!symbols.is_bound("com.acme.v2.Order"));
        assert_eq!(symbols.imports(), vec!["com.acme.v1.Order"]);
    }

    #[test]
    fn test_imports_sorted_and_deduplicated() {
        let mut symbols = SymbolTable::new();
        symbols.display("com.acme.v2.Line");
        symbols.display("com.acme.v1.Address");
        symbols.display("com.acme.v2.Line");
        symbols.display("com.acme.v1.Color");

        assert_eq!(
            symbols.imports(),
            vec!["com.acme.v1.Address", "com.acme.v1.Color", "com.acme.v2.Line"]
        );
        let order: Vec<&str> = symbols.bindings().map(|(short, _)| short).collect();
        assert_eq!(order, vec!["Line", "Address", "Color"]);
    }

    #[test]
    fn test_nested_types_use_canonical_names() {
        let mut symbols = SymbolTable::new();
        assert_eq!(symbols.display("com.acme.v1.Order$Line"), "Line");
        assert_eq!(symbols.display("com.acme.v2.Order$Line"), "com.acme.v2.Order.Line");
        assert_eq!(symbols.imports(), vec!["com.acme.v1.Order.Line"]);
    }

    #[test]
    fn test_default_package_not_imported() {
        let mut symbols = SymbolTable::new();
        assert_eq!(symbols.display("Order"), "Order");
        assert!(symbols.imports().is_empty());
        assert_eq!(symbols.len(), 1);
    }
}
