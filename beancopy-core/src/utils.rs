//! Shared string helpers for Java names.

/// Upper-case the first character, leaving the rest untouched (e.g., "qty" -> "Qty")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Build a bean accessor name from a prefix and a property name (e.g., "get" + "qty" -> "getQty")
pub fn accessor_name(prefix: &str, property: &str) -> String {
    format!("{}{}", prefix, capitalize(property))
}

/// Short (simple) name of a qualified Java type name.
///
/// Nested types are separated by `$` (binary name), so `a.b.Outer$Inner` -> "Inner".
pub fn short_name(qualified: &str) -> &str {
    qualified
        .rsplit(['.', '$'])
        .next()
        .unwrap_or(qualified)
}

/// Source-level name of a qualified Java type name (`a.b.Outer$Inner` -> "a.b.Outer.Inner")
pub fn canonical_name(qualified: &str) -> String {
    qualified.replace('$', ".")
}

/// Package portion of a qualified name, empty for the default package.
pub fn package_of(qualified: &str) -> &str {
    let outer = qualified.split('$').next().unwrap_or(qualified);
    match outer.rfind('.') {
        Some(pos) => &outer[..pos],
        None => "",
    }
}
