use crate::error::CompileError;
use derive_more::{Deref, IntoIterator};
use std::{fmt, str::FromStr};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

///
/// LiteralTag
///
/// Type tag a parser attaches to a literal token.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LiteralTag {
    Boolean,
    Date,
    Double,
    Integer,
    String,
}

impl LiteralTag {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Double => "double",
            Self::Integer => "integer",
            Self::String => "string",
        }
    }
}

impl FromStr for LiteralTag {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "boolean" => Ok(Self::Boolean),
            "date" => Ok(Self::Date),
            "double" => Ok(Self::Double),
            "integer" => Ok(Self::Integer),
            "string" => Ok(Self::String),
            other => Err(CompileError::invalid_literal(format!(
                "unknown literal: {other}"
            ))),
        }
    }
}

///
/// Literal
///

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Boolean(bool),
    Date(OffsetDateTime),
    Double(f64),
    Integer(i64),
    String(String),
}

impl Literal {
    #[must_use]
    pub const fn tag(&self) -> LiteralTag {
        match self {
            Self::Boolean(_) => LiteralTag::Boolean,
            Self::Date(_) => LiteralTag::Date,
            Self::Double(_) => LiteralTag::Double,
            Self::Integer(_) => LiteralTag::Integer,
            Self::String(_) => LiteralTag::String,
        }
    }

    /// Build a literal from a parser's `(tag, text)` pair.
    pub fn parse(tag: &str, text: &str) -> Result<Self, CompileError> {
        let tag: LiteralTag = tag.parse()?;
        let invalid = || CompileError::invalid_literal(format!("invalid {}: {text}", tag.name()));

        match tag {
            LiteralTag::Boolean => match text.trim() {
                t if t.eq_ignore_ascii_case("true") => Ok(Self::Boolean(true)),
                t if t.eq_ignore_ascii_case("false") => Ok(Self::Boolean(false)),
                _ => Err(invalid()),
            },
            LiteralTag::Date => OffsetDateTime::parse(text.trim(), &Rfc3339)
                .map(Self::Date)
                .map_err(|_| invalid()),
            LiteralTag::Double => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(Self::Double)
                .ok_or_else(invalid),
            LiteralTag::Integer => text
                .trim()
                .parse::<i64>()
                .map(Self::Integer)
                .map_err(|_| invalid()),
            LiteralTag::String => Ok(Self::String(text.to_string())),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Date(value) => match value.format(&Rfc3339) {
                Ok(text) => write!(f, "TIMESTAMP '{text}'"),
                Err(_) => write!(f, "TIMESTAMP '{value}'"),
            },
            Self::Double(value) => write!(f, "{value:?}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "'{}'", value.replace('\'', "\\'")),
        }
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<OffsetDateTime> for Literal {
    fn from(value: OffsetDateTime) -> Self {
        Self::Date(value)
    }
}

///
/// LiteralList
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq)]
pub struct LiteralList(#[into_iterator(owned, ref)] Vec<Literal>);

impl LiteralList {
    #[must_use]
    pub const fn new(literals: Vec<Literal>) -> Self {
        Self(literals)
    }
}

impl<L: Into<Literal>> FromIterator<L> for LiteralList {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for LiteralList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, literal) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{literal}")?;
        }
        f.write_str(")")
    }
}
