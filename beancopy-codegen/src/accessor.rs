//! Getter/setter name resolution with binding-alias fallback.

use std::fmt;

use beancopy_core::accessor_name;
use beancopy_schema::{FieldDescriptor, TypeDescriptor};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorKind {
    Getter,
    Setter,
}

impl fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Getter => write!(f, "getter"),
            Self::Setter => write!(f, "setter"),
        }
    }
}

/// No accessor matched the field name or its binding alias.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no {kind} for '{field}' on '{owner}' (tried {})", .tried.join(", "))]
pub struct AccessorNotFound {
    pub owner: String,
    pub field: String,
    pub kind: AccessorKind,
    /// Every candidate name probed, in order
    pub tried: Vec<String>,
}

/// Resolve the method reading `field`.
///
/// Probes `get<Name>()` (`is<Name>()` for a `boolean` primitive), then the
/// same prefix applied to the field's `xml-name`.
pub fn resolve_getter(
    owner: &TypeDescriptor,
    field: &FieldDescriptor,
) -> Result<String, AccessorNotFound> {
    let prefix = if field.ty().is_boolean() { "is" } else { "get" };
    resolve(owner, field, AccessorKind::Getter, prefix, |name| {
        owner.has_getter(name)
    })
}

/// Resolve the method writing `field`: `set<Name>(T)` where `T` erases to the
/// field's declared type, then the alias form.
pub fn resolve_setter(
    owner: &TypeDescriptor,
    field: &FieldDescriptor,
) -> Result<String, AccessorNotFound> {
    resolve(owner, field, AccessorKind::Setter, "set", |name| {
        owner.has_setter(name, field.ty())
    })
}

fn resolve(
    owner: &TypeDescriptor,
    field: &FieldDescriptor,
    kind: AccessorKind,
    prefix: &str,
    exists: impl Fn(&str) -> bool,
) -> Result<String, AccessorNotFound> {
    let mut tried = Vec::with_capacity(2);
    for property in std::iter::once(field.name()).chain(field.xml_name()) {
        let candidate = accessor_name(prefix, property);
        if exists(&candidate) {
            return Ok(candidate);
        }
        if !tried.contains(&candidate) {
            tried.push(candidate);
        }
    }
    Err(AccessorNotFound {
        owner: owner.qualified_name().to_string(),
        field: field.name().to_string(),
        kind,
        tried,
    })
}
