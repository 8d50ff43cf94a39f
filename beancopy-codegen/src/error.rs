use std::path::PathBuf;

use beancopy_schema::TypeNotFound;
use miette::Diagnostic;
use thiserror::Error;

/// Fatal conditions that abort a generation run.
///
/// Per-field problems (missing destination field, missing accessor) are not
/// errors; they become comments in the output plus diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GenerateError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    TypeNotFound(#[from] TypeNotFound),

    #[error(
        "field '{field}' of '{owner}' is declared as '{declared}', expected java.util.List with exactly one type argument"
    )]
    #[diagnostic(code(beancopy::malformed_list))]
    MalformedList {
        owner: String,
        field: String,
        declared: String,
    },

    #[error("field '{field}' of '{owner}' has unsupported list element type '{element}'")]
    #[diagnostic(
        code(beancopy::unsupported_element),
        help("list elements must be plain classes, not generic types")
    )]
    UnsupportedElement {
        owner: String,
        field: String,
        element: String,
    },

    #[error("field '{field}' of '{owner}' is declared as '{declared}', an array of model types")]
    #[diagnostic(
        code(beancopy::unsupported_array),
        help("only arrays of primitives and builtin types can be copied")
    )]
    UnsupportedArray {
        owner: String,
        field: String,
        declared: String,
    },

    #[error("'{name}' has no zero-argument constructor")]
    #[diagnostic(
        code(beancopy::no_default_constructor),
        help("generated routines instantiate destination types with `new`")
    )]
    NoDefaultConstructor { name: String },

    #[error("enum '{to}' lacks constants of '{from}': {}", .missing.join(", "))]
    #[diagnostic(
        code(beancopy::enum_mismatch),
        help("set `enum-check = \"warn\"` to emit the conversion anyway")
    )]
    EnumMismatch {
        from: String,
        to: String,
        missing: Vec<String>,
    },
}

/// Errors loading a `beancopy.toml` configuration file.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    #[diagnostic(code(beancopy::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file")]
    #[diagnostic(code(beancopy::config::parse))]
    Parse(#[from] toml::de::Error),

    #[error("invalid {key}: {message}")]
    #[diagnostic(code(beancopy::config::invalid))]
    Invalid { key: &'static str, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_mismatch_message() {
        let err = GenerateError::EnumMismatch {
            from: "a.Color".into(),
            to: "b.Color".into(),
            missing: vec!["BLUE".into(), "CYAN".into()],
        };
        assert_eq!(
            err.to_string(),
            "enum 'b.Color' lacks constants of 'a.Color': BLUE, CYAN"
        );
    }

    #[test]
    fn test_type_not_found_is_transparent() {
        let err: GenerateError = TypeNotFound {
            name: "com.acme.Gone".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "type 'com.acme.Gone' not found in any schema description"
        );
    }
}
