//! Core utilities and types for the beancopy transformer generator.
//!
//! This crate provides the file-output plumbing and Java naming helpers
//! shared by the schema loader, the generator and the CLI.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, FileSink, Overwrite, OutputSink, PreviewSink, WriteResult};
// String utilities
pub use utils::{accessor_name, canonical_name, capitalize, package_of, short_name};
