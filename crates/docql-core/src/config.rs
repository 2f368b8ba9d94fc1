//! Module: config
//! Responsibility: compiler settings and their TOML loading.
//! Does not own: schema definitions or engine connection settings.

use serde::Deserialize;
use thiserror::Error as ThisError;

/// Root under which projected paths are extracted from stored documents.
pub const DEFAULT_DOCUMENT_ROOT_PATH: &str = "/document";

/// Replacement for the schema namespace separator in storage keys.
pub const DEFAULT_NAMESPACE_SEPARATOR: &str = ".";

///
/// CompilerConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    pub document_root_path: String,
    pub namespace_separator: String,

    /// Recorded on the compile span; no active branch consults it while
    /// full-text predicates are unsupported.
    pub fulltext_search_disabled: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            document_root_path: DEFAULT_DOCUMENT_ROOT_PATH.to_string(),
            namespace_separator: DEFAULT_NAMESPACE_SEPARATOR.to_string(),
            fulltext_search_disabled: false,
        }
    }
}

impl CompilerConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.document_root_path.starts_with('/') {
            return Err(ConfigError::Invalid {
                key: "document_root_path",
                message: format!("'{}' must start with '/'", self.document_root_path),
            });
        }
        if self.namespace_separator.is_empty() || self.namespace_separator.contains('*') {
            return Err(ConfigError::Invalid {
                key: "namespace_separator",
                message: format!(
                    "'{}' must be non-empty and must not contain '*'",
                    self.namespace_separator
                ),
            });
        }

        Ok(())
    }

    /// Document root without a trailing separator.
    #[must_use]
    pub fn document_root(&self) -> &str {
        self.document_root_path.trim_end_matches('/')
    }
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to parse compiler config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid compiler config key '{key}': {message}")]
    Invalid { key: &'static str, message: String },
}
