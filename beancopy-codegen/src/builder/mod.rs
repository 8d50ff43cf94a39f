//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Line builder for indented code
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
