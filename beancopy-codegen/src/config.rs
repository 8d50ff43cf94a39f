//! Generator settings, read from the `[generator]` table of `beancopy.toml`.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use beancopy_schema::validate_identifier;
use serde::{Deserialize, Serialize};

use crate::{BuiltinTypes, ConfigError, builder::Indent, classify::DEFAULT_BUILTIN_PACKAGES};

/// Order in which discovered type pairs are taken from the work-list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    /// Most recently discovered pair first
    #[default]
    Lifo,
    /// Discovery order
    Fifo,
}

impl FromStr for TraversalOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lifo" => Ok(Self::Lifo),
            "fifo" => Ok(Self::Fifo),
            _ => Err(format!("unknown order '{}', expected 'lifo' or 'fifo'", s)),
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lifo => write!(f, "lifo"),
            Self::Fifo => write!(f, "fifo"),
        }
    }
}

/// How enum-to-enum conversions are checked for missing constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumCheck {
    /// Record a warning and emit the conversion
    #[default]
    Warn,
    /// Abort the run
    Strict,
    /// Do not check; a missing constant fails at runtime in `valueOf`
    Lazy,
}

impl FromStr for EnumCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warn" => Ok(Self::Warn),
            "strict" => Ok(Self::Strict),
            "lazy" => Ok(Self::Lazy),
            _ => Err(format!(
                "unknown enum check '{}', expected 'warn', 'strict' or 'lazy'",
                s
            )),
        }
    }
}

impl fmt::Display for EnumCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warn => write!(f, "warn"),
            Self::Strict => write!(f, "strict"),
            Self::Lazy => write!(f, "lazy"),
        }
    }
}

/// Settings for one generation run.
///
/// `Default` reproduces the classic output: `com.example.JaxbTransformer`,
/// two-space indentation, LIFO traversal and a timestamp header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Package of the generated class; empty for the default package
    pub package: String,
    pub class_name: String,
    /// Spaces per indent level, `0` for tabs
    pub indent: u8,
    pub order: TraversalOrder,
    pub enum_check: EnumCheck,
    /// Emit the `/** Generated on ... */` header
    pub timestamp: bool,
    /// Package prefixes treated as runtime types (replaces the defaults)
    pub builtin_packages: Vec<String>,
    /// Package prefixes added to `builtin-packages`
    pub extra_builtin_packages: Vec<String>,
    /// Output file; defaults to `<class-name>.java`
    pub output: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: "com.example".to_string(),
            class_name: "JaxbTransformer".to_string(),
            indent: 2,
            order: TraversalOrder::default(),
            enum_check: EnumCheck::default(),
            timestamp: true,
            builtin_packages: DEFAULT_BUILTIN_PACKAGES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            extra_builtin_packages: Vec::new(),
            output: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    generator: GeneratorConfig,
}

impl GeneratorConfig {
    /// Load the `[generator]` table from a `beancopy.toml` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.generator.validate()?;
        Ok(file.generator)
    }

    /// Check the values a Java compiler would reject.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.package.is_empty() {
            for segment in self.package.split('.') {
                if let Some(reason) = validate_identifier(segment) {
                    return Err(ConfigError::Invalid {
                        key: "package",
                        message: format!("'{}': {}", self.package, reason),
                    });
                }
            }
        }
        if let Some(reason) = validate_identifier(&self.class_name) {
            return Err(ConfigError::Invalid {
                key: "class-name",
                message: format!("'{}': {}", self.class_name, reason),
            });
        }
        if self.indent > 8 {
            return Err(ConfigError::Invalid {
                key: "indent",
                message: format!("{} is wider than 8 spaces", self.indent),
            });
        }
        Ok(())
    }

    pub fn indent(&self) -> Indent {
        Indent::from(self.indent)
    }

    /// The classifier described by `builtin-packages` and `extra-builtin-packages`.
    pub fn builtin_types(&self) -> BuiltinTypes {
        BuiltinTypes::new(
            self.builtin_packages
                .iter()
                .chain(&self.extra_builtin_packages)
                .cloned(),
        )
    }

    /// `output`, or `<class-name>.java` when unset.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.java", self.class_name)))
    }
}
