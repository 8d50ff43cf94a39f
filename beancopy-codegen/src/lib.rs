//! Transformer generation for the beancopy tool.
//!
//! Given a source and a destination root type, the [`Generator`] walks every
//! type pair reachable from the roots, plans how each field is carried over
//! and emits one `transform` overload per pair into a single Java class.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented code building ([`CodeBuilder`](builder::CodeBuilder))
//! - classification, accessor resolution and field planning
//! - work-list traversal ([`EmissionSession`]) and routine emission
//! - [`GeneratorConfig`] and diagnostics

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;

mod accessor;
mod classify;
mod config;
mod diagnostic;
mod emit;
mod error;
mod generator;
mod pair;
mod plan;
mod session;
mod symbols;
mod unit;

pub use accessor::{AccessorKind, AccessorNotFound, resolve_getter, resolve_setter};
pub use classify::{BuiltinTypes, DEFAULT_BUILTIN_PACKAGES};
pub use config::{EnumCheck, GeneratorConfig, TraversalOrder};
pub use diagnostic::{Diagnostic, DiagnosticSink, Phase, Severity};
pub use emit::RoutineEmitter;
pub use error::{ConfigError, GenerateError};
pub use generator::Generator;
pub use pair::{TypePair, WorkList};
pub use plan::{FieldPlan, FieldPlanner, Strategy};
pub use session::{EmissionSession, TraversalState};
pub use symbols::SymbolTable;
pub use unit::{GeneratedUnit, Routine};
