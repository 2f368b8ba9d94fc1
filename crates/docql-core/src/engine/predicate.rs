use crate::engine::value::ElementType;
use serde::Serialize;
use std::fmt;

///
/// RangeOperator
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum RangeOperator {
    #[serde(rename = "LT")]
    Lt,
    #[serde(rename = "LE")]
    Le,
    #[serde(rename = "GT")]
    Gt,
    #[serde(rename = "GE")]
    Ge,
}

impl RangeOperator {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Lt => "LT",
            Self::Le => "LE",
            Self::Gt => "GT",
            Self::Ge => "GE",
        }
    }
}

///
/// StructuredQuery
///
/// The engine's predicate algebra. Trees are immutable values built with
/// the constructors below; nothing accumulates state across a compile.
/// Serializes to the engine's structured-query JSON shape.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum StructuredQuery {
    #[serde(rename = "and-query")]
    And { queries: Vec<Self> },

    #[serde(rename = "or-query")]
    Or { queries: Vec<Self> },

    #[serde(rename = "not-query")]
    Not(Box<Self>),

    /// Matches when the element holds any of `text`.
    #[serde(rename = "value-query")]
    Value { element: String, text: Vec<String> },

    #[serde(rename = "range-query")]
    Range {
        element: String,
        #[serde(rename = "type")]
        value_type: ElementType,
        #[serde(rename = "range-operator")]
        operator: RangeOperator,
        value: String,
    },

    /// Matches when `query` matches inside the element's container.
    #[serde(rename = "container-query")]
    Container { element: String, query: Box<Self> },
}

impl StructuredQuery {
    #[must_use]
    pub fn value_eq(element: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Value {
            element: element.into(),
            text: vec![value.into()],
        }
    }

    #[must_use]
    pub fn value_in(element: impl Into<String>, values: Vec<String>) -> Self {
        Self::Value {
            element: element.into(),
            text: values,
        }
    }

    #[must_use]
    pub fn range(
        element: impl Into<String>,
        value_type: ElementType,
        operator: RangeOperator,
        value: impl Into<String>,
    ) -> Self {
        Self::Range {
            element: element.into(),
            value_type,
            operator,
            value: value.into(),
        }
    }

    #[must_use]
    pub const fn and(queries: Vec<Self>) -> Self {
        Self::And { queries }
    }

    #[must_use]
    pub const fn or(queries: Vec<Self>) -> Self {
        Self::Or { queries }
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(query: Self) -> Self {
        Self::Not(Box::new(query))
    }

    /// Matches documents where the element container exists at all.
    #[must_use]
    pub fn container_exists(element: impl Into<String>) -> Self {
        Self::Container {
            element: element.into(),
            query: Box::new(Self::and(Vec::new())),
        }
    }

    /// Number of leaf predicates in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::And { queries } | Self::Or { queries } => {
                queries.iter().map(Self::leaf_count).sum()
            }
            Self::Not(inner) => inner.leaf_count(),
            Self::Value { .. } | Self::Range { .. } | Self::Container { .. } => 1,
        }
    }
}

impl fmt::Display for StructuredQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(
            f: &mut fmt::Formatter<'_>,
            name: &str,
            queries: &[StructuredQuery],
        ) -> fmt::Result {
            write!(f, "{name}(")?;
            for (index, query) in queries.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{query}")?;
            }
            f.write_str(")")
        }

        match self {
            Self::And { queries } => join(f, "and", queries),
            Self::Or { queries } => join(f, "or", queries),
            Self::Not(inner) => write!(f, "not({inner})"),
            Self::Value { element, text } => write!(f, "value({element}, {text:?})"),
            Self::Range {
                element,
                value_type,
                operator,
                value,
            } => write!(f, "range({element} {} {value:?} as {value_type})", operator.tag()),
            Self::Container { element, query } => write!(f, "container({element}, {query})"),
        }
    }
}
