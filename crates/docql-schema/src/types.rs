use crate::field::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// ScalarType
///
/// Leaf value types a document field can declare.
/// Everything the query compiler needs to coerce literals is decided here;
/// storage-level details (precision, encoding) stay with the engine.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    Binary,
    Boolean,
    Date,
    Double,
    Integer,
    String,
}

impl ScalarType {
    #[must_use]
    pub const fn is_boolean(self) -> bool {
        matches!(self, Self::Boolean)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Double => "double",
            Self::Integer => "integer",
            Self::String => "string",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

///
/// FieldType
///
/// Structural type of a schema field: a scalar, a list of some element
/// type, or a complex type with named sub-fields.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Scalar(ScalarType),
    List(Box<Self>),
    Complex(ComplexType),
}

impl FieldType {
    #[must_use]
    pub fn list(element: Self) -> Self {
        Self::List(Box::new(element))
    }

    #[must_use]
    pub const fn scalar(&self) -> Option<ScalarType> {
        match self {
            Self::Scalar(scalar) => Some(*scalar),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Scalar(ScalarType::Boolean))
    }

    /// Element type when this is a list.
    #[must_use]
    pub fn element_type(&self) -> Option<&Self> {
        match self {
            Self::List(element) => Some(element),
            _ => None,
        }
    }

    /// Sub-field lookup when this is a complex type.
    #[must_use]
    pub fn sub_field(&self, name: &str) -> Option<&Field> {
        match self {
            Self::Complex(complex) => complex.field(name),
            _ => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(inner) => write!(f, "{inner}"),
            Self::List(inner) => write!(f, "List<{inner}>"),
            Self::Complex(inner) => write!(f, "Complex<{}>", inner.name),
        }
    }
}

///
/// ComplexType
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ComplexType {
    pub name: String,
    pub fields: Vec<Field>,
}

impl ComplexType {
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Find a sub-field by prefixed or local name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.name.local == name || field.name.prefixed_name() == name)
    }
}
