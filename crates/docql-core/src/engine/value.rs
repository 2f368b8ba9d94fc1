use serde::Serialize;
use std::fmt;
use time::{
    OffsetDateTime, UtcOffset,
    format_description::well_known::{Iso8601, Rfc3339},
};

///
/// ElementType
///
/// Typed-index element types a range predicate can target.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum ElementType {
    #[serde(rename = "xs:boolean")]
    Boolean,
    #[serde(rename = "xs:dateTime")]
    DateTime,
    #[serde(rename = "xs:double")]
    Double,
    #[serde(rename = "xs:long")]
    Long,
    #[serde(rename = "xs:string")]
    String,
}

impl ElementType {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Boolean => "xs:boolean",
            Self::DateTime => "xs:dateTime",
            Self::Double => "xs:double",
            Self::Long => "xs:long",
            Self::String => "xs:string",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

///
/// EngineValue
///
/// Native runtime value a query literal coerces to before it is put on
/// the wire.
///

#[derive(Clone, Debug, PartialEq)]
pub enum EngineValue {
    Boolean(bool),
    Date(OffsetDateTime),
    Double(f64),
    Long(i64),
    String(String),
}

impl EngineValue {
    #[must_use]
    pub const fn element_type(&self) -> ElementType {
        match self {
            Self::Boolean(_) => ElementType::Boolean,
            Self::Date(_) => ElementType::DateTime,
            Self::Double(_) => ElementType::Double,
            Self::Long(_) => ElementType::Long,
            Self::String(_) => ElementType::String,
        }
    }

    /// Wire representation. Total over every variant.
    #[must_use]
    pub fn serialize(&self) -> String {
        match self {
            Self::Boolean(value) => value.to_string(),
            Self::Date(value) => serialize_date(*value),
            // Debug keeps a fractional part on whole numbers (`1.0`).
            Self::Double(value) => format!("{value:?}"),
            Self::Long(value) => value.to_string(),
            Self::String(value) => value.clone(),
        }
    }
}

fn serialize_date(value: OffsetDateTime) -> String {
    let utc = value.to_offset(UtcOffset::UTC);

    // RFC 3339 has no negative years
    utc.format(&Rfc3339)
        .or_else(|_| utc.format(&Iso8601::DEFAULT))
        .unwrap_or_else(|_| utc.to_string())
}
