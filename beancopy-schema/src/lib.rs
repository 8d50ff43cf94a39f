//! Schema descriptions for the beancopy transformer generator.
//!
//! Java classes cannot be reflected from Rust, so both object models are
//! described as data: TOML files listing each type's fields, binding
//! aliases, accessor methods and enum constants. This crate parses and
//! validates those files (with `miette` diagnostics pointing into the
//! source) and exposes them through the [`TypeRegistry`] trait.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod descriptor;
mod error;
mod registry;
mod schema;
mod types;
mod validate;

pub use descriptor::{FieldDescriptor, TypeDescriptor};
pub use error::{Error, Result, SourceContext};
pub use registry::{SchemaRegistry, TypeNotFound, TypeRegistry};
pub use schema::{AccessorStyle, FieldDef, Schema, TypeDef, TypeKind};
pub use types::{DeclaredType, LIST_TYPE, MethodSignature, PRIMITIVES};
pub use validate::{ParseContext, validate_identifier};
