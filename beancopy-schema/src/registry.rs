//! Type registry: resolves qualified names to descriptors.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use miette::Diagnostic;
use thiserror::Error;

use crate::{Error, Result, Schema, TypeDescriptor};

/// A qualified name could not be resolved from the loaded schema descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("type '{name}' not found in any schema description")]
#[diagnostic(
    code(beancopy::type_not_found),
    help("declare it as [types.\"{name}\"] in one of the files passed with --schema")
)]
pub struct TypeNotFound {
    pub name: String,
}

/// Source of type descriptors for the generator.
///
/// This is the generator's only view of the two object models; any source of
/// descriptors (schema files, a pre-built index) can implement it.
pub trait TypeRegistry {
    /// Resolve a binary qualified name such as `com.acme.Order$Line`.
    fn resolve_type(&self, qualified_name: &str) -> std::result::Result<&TypeDescriptor, TypeNotFound>;
}

/// Registry assembled from one or more schema description files.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    types: IndexMap<String, TypeDescriptor>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and merge several schema files, in order.
    pub fn from_files<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<Self> {
        let mut registry = Self::new();
        for path in paths {
            registry.load_file(path)?;
        }
        Ok(registry)
    }

    /// Parse and merge a single schema file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let schema = Schema::from_file(path)?;
        self.add_schema(&schema, &path.display().to_string())
    }

    /// Parse and merge schema text; `origin` names it in error messages.
    pub fn load_str(&mut self, content: &str, origin: &str) -> Result<()> {
        let schema = Schema::from_str_with_filename(content, origin)?;
        self.add_schema(&schema, origin)
    }

    /// Merge an already parsed schema. Type names must be unique across all schemas.
    pub fn add_schema(&mut self, schema: &Schema, origin: &str) -> Result<()> {
        for (name, def) in &schema.types {
            if let Some(existing) = self.types.get(name) {
                return Err(Box::new(Error::DuplicateType {
                    name: name.clone(),
                    first: existing.origin().to_string(),
                    second: origin.to_string(),
                }));
            }
            self.types
                .insert(name.clone(), TypeDescriptor::from_def(name, def, origin));
        }
        Ok(())
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.types.contains_key(qualified_name)
    }

    /// All descriptors in load order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromStr for SchemaRegistry {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        let mut registry = Self::new();
        registry.load_str(s, "schema.toml")?;
        Ok(registry)
    }
}

impl TypeRegistry for SchemaRegistry {
    fn resolve_type(&self, qualified_name: &str) -> std::result::Result<&TypeDescriptor, TypeNotFound> {
        self.types.get(qualified_name).ok_or_else(|| TypeNotFound {
            name: qualified_name.to_string(),
        })
    }
}
