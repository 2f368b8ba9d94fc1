use crate::types::FieldType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between a namespace prefix and a local field name.
pub const NAMESPACE_SEPARATOR: char = ':';

///
/// QualifiedName
///
/// Field name with an optional namespace prefix (`dc:title`).
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct QualifiedName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub local: String,
}

impl QualifiedName {
    #[must_use]
    pub fn new(local: impl Into<String>) -> Self {
        Self {
            prefix: None,
            local: local.into(),
        }
    }

    #[must_use]
    pub fn prefixed(prefix: impl Into<String>, local: impl Into<String>) -> Self {
        let prefix = prefix.into();

        Self {
            prefix: (!prefix.is_empty()).then_some(prefix),
            local: local.into(),
        }
    }

    /// Canonical name used by the catalog and in storage paths.
    #[must_use]
    pub fn prefixed_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{NAMESPACE_SEPARATOR}{}", self.local),
            None => self.local.clone(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{prefix}{NAMESPACE_SEPARATOR}{}", self.local),
            None => f.write_str(&self.local),
        }
    }
}

///
/// Field
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Field {
    pub name: QualifiedName,

    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl Field {
    #[must_use]
    pub fn new(local: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: QualifiedName::new(local),
            field_type,
        }
    }

    #[must_use]
    pub fn prefixed(
        prefix: impl Into<String>,
        local: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            name: QualifiedName::prefixed(prefix, local),
            field_type,
        }
    }
}
