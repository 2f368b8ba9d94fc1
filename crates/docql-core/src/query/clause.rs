use crate::query::operand::{Operand, Reference};

///
/// SelectClause
///
/// Projection list. Only bare references are projectable; anything else is
/// rejected when the query is compiled.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectClause {
    pub elements: Vec<Operand>,
}

impl SelectClause {
    #[must_use]
    pub fn new(elements: Vec<Operand>) -> Self {
        Self { elements }
    }

    /// Select clause projecting the given property paths.
    #[must_use]
    pub fn references<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            elements: names
                .into_iter()
                .map(|name| Operand::Reference(Reference::new(name)))
                .collect(),
        }
    }

    #[must_use]
    pub fn push(mut self, element: impl Into<Operand>) -> Self {
        self.elements.push(element.into());
        self
    }
}

///
/// OrderByExpr
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderByExpr {
    pub reference: Reference,
    pub descending: bool,
}

///
/// OrderByClause
///
/// Accepted alongside a query; the compiler does not translate ordering.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OrderByClause {
    pub elements: Vec<OrderByExpr>,
}

impl OrderByClause {
    #[must_use]
    pub fn asc(mut self, name: impl Into<String>) -> Self {
        self.elements.push(OrderByExpr {
            reference: Reference::new(name),
            descending: false,
        });
        self
    }

    #[must_use]
    pub fn desc(mut self, name: impl Into<String>) -> Self {
        self.elements.push(OrderByExpr {
            reference: Reference::new(name),
            descending: true,
        });
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
