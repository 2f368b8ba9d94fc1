use std::fmt;
use thiserror::Error as ThisError;

///
/// CompileError
///
/// Every way a single compile call can fail. All variants abort translation
/// immediately; no partial query is ever returned. Callers should surface
/// these as a rejected query (bad request), never as a server fault.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CompileError {
    #[error("no such property: {path}")]
    UnknownProperty { path: String },

    #[error("invalid query: {message}")]
    InvalidQuery { message: String },

    #[error("invalid literal: {message}")]
    InvalidLiteral { message: String },

    #[error("unsupported operator: {feature}")]
    UnsupportedOperator { feature: String },

    #[error("unknown operator: {operator}")]
    UnknownOperator { operator: String },
}

impl CompileError {
    pub(crate) fn unknown_property(path: impl Into<String>) -> Self {
        Self::UnknownProperty { path: path.into() }
    }

    pub(crate) fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_literal(message: impl Into<String>) -> Self {
        Self::InvalidLiteral {
            message: message.into(),
        }
    }

    pub(crate) fn unsupported(feature: impl fmt::Display) -> Self {
        Self::UnsupportedOperator {
            feature: feature.to_string(),
        }
    }

    pub(crate) fn unknown_operator(operator: impl Into<String>) -> Self {
        Self::UnknownOperator {
            operator: operator.into(),
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::UnsupportedOperator { .. } => ErrorClass::Unsupported,
            Self::UnknownProperty { .. }
            | Self::InvalidQuery { .. }
            | Self::InvalidLiteral { .. }
            | Self::UnknownOperator { .. } => ErrorClass::InvalidInput,
        }
    }

    /// Stable label for the variant, used by metrics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownProperty { .. } => "unknown_property",
            Self::InvalidQuery { .. } => "invalid_query",
            Self::InvalidLiteral { .. } => "invalid_literal",
            Self::UnsupportedOperator { .. } => "unsupported_operator",
            Self::UnknownOperator { .. } => "unknown_operator",
        }
    }
}

///
/// ErrorClass
///
/// Coarse classification for presenting a rejection to the caller.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidInput,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidInput => "invalid_input",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}
