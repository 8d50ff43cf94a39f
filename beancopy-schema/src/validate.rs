//! Validation context and utilities for schema descriptions.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the schema, making it easier to pass validation context into
/// per-type and per-field checks.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "orders.toml");
/// ctx.validate_qualified_name("com.acme.Order", "type")?;
///
/// let nested = ctx.push("com.acme.Order");
/// nested.validate_name("quantity", "field")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["com.acme.Order", "lines"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path joined with `::`.
    ///
    /// Type names already contain dots, so a dot separator would be ambiguous.
    pub fn path_string(&self) -> String {
        self.path.join("::")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "field in 'com.acme.Order'" or just "type" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source, preferring the current type's section.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        let src = self.source.src();
        let offset = self
            .path
            .first()
            .and_then(|owner| find_type_span(src, owner))
            .map_or(0, |span| span.offset());
        find_name_span(&src[offset..], name).map(|span| (span.offset() + offset, span.len()).into())
    }

    /// Find every span where `name` appears as a quoted value inside the current type's section.
    pub fn find_quoted_spans(&self, name: &str) -> Vec<SourceSpan> {
        let src = self.source.src();
        let offset = self
            .path
            .first()
            .and_then(|owner| find_type_span(src, owner))
            .map_or(0, |span| span.offset());
        let section = &src[offset..];
        let end = section[1.min(section.len())..]
            .find("\n[")
            .map_or(section.len(), |pos| pos + 1);
        let quoted = format!("\"{}\"", name);
        section[..end]
            .match_indices(&quoted)
            .map(|(pos, _)| SourceSpan::from((offset + pos + 1, name.len())))
            .collect()
    }

    /// Validate that a name is a valid Java identifier.
    ///
    /// Checks for reserved keywords and valid identifier format.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_java_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate a dotted qualified name such as `com.acme.Order` or `com.acme.Order$Line`.
    pub fn validate_qualified_name(&self, name: &str, kind: &str) -> Result<()> {
        if name.is_empty() {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                "name cannot be empty",
                None,
            ));
        }

        for segment in name.split(['.', '$']) {
            if is_java_keyword(segment) {
                return Err(self.source.reserved_keyword_error(
                    segment,
                    self.context_for(kind),
                    find_type_span(self.source.src(), name),
                ));
            }
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.source.invalid_identifier_error(
                    name,
                    self.context_for(kind),
                    reason,
                    find_type_span(self.source.src(), name),
                ));
            }
        }

        Ok(())
    }
}

/// Java reserved words that cannot be used as identifiers
/// Source: JLS §3.9 (keywords) and §3.10.3/§3.10.8 (literals)
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "_",
    // Literals
    "true", "false", "null",
];

/// Check if a name is a Java reserved word
pub(crate) fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Find the span of a type's section header, `[types."name"]`, or its quoted name anywhere.
pub(crate) fn find_type_span(src: &str, name: &str) -> Option<SourceSpan> {
    let header = format!("[types.\"{}\"]", name);
    if let Some(pos) = src.find(&header) {
        // Skip `[types."`
        return Some(SourceSpan::from((pos + 8, name.len())));
    }

    let quoted = format!("\"{}\"", name);
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, name.len())))
}

/// Find the span of a name in the TOML source
/// Searches for the quoted form first (`name = "qty"`), then a bare occurrence
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.find(&quoted) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    // Fallback: just find the name anywhere (less precise)
    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Validate that a name is a valid Java identifier
/// Returns None if valid, Some(reason) if invalid
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    if is_java_keyword(name) {
        return Some("name is a Java reserved word");
    }

    let mut chars = name.chars();

    // First character must be a letter, underscore or dollar sign
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, '_' or '$'"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_' || c == '$')) {
        return Some("name must contain only letters, digits, '_' and '$'");
    }

    None
}
