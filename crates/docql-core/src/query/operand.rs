use crate::query::{
    literal::{Literal, LiteralList},
    operator::Operator,
};
use std::fmt;

///
/// Reference
///
/// A property path as written in the query (`dc:title`, `files/3/name`,
/// `ecm:primaryType`). Interpretation is left to the field resolver.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Reference {
    pub name: String,
}

impl Reference {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn eq(self, value: impl Into<Literal>) -> Expression {
        Expression::binary(self, Operator::Eq, value.into())
    }

    #[must_use]
    pub fn not_eq(self, value: impl Into<Literal>) -> Expression {
        Expression::binary(self, Operator::NotEq, value.into())
    }

    #[must_use]
    pub fn lt(self, value: impl Into<Literal>) -> Expression {
        Expression::binary(self, Operator::Lt, value.into())
    }

    #[must_use]
    pub fn lt_eq(self, value: impl Into<Literal>) -> Expression {
        Expression::binary(self, Operator::LtEq, value.into())
    }

    #[must_use]
    pub fn gt(self, value: impl Into<Literal>) -> Expression {
        Expression::binary(self, Operator::Gt, value.into())
    }

    #[must_use]
    pub fn gt_eq(self, value: impl Into<Literal>) -> Expression {
        Expression::binary(self, Operator::GtEq, value.into())
    }

    #[must_use]
    pub fn in_list(self, values: LiteralList) -> Expression {
        Expression::binary(self, Operator::In, values)
    }

    #[must_use]
    pub fn not_in_list(self, values: LiteralList) -> Expression {
        Expression::binary(self, Operator::NotIn, values)
    }

    #[must_use]
    pub fn is_null(self) -> Expression {
        Expression::unary(Operator::IsNull, self)
    }

    #[must_use]
    pub fn is_not_null(self) -> Expression {
        Expression::unary(Operator::IsNotNull, self)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

///
/// Operand
///
/// Closed set of nodes that can appear in an expression tree.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Reference(Reference),
    Literal(Literal),
    LiteralList(LiteralList),
    Expression(Box<Expression>),
    MultiExpression(MultiExpression),
}

impl Operand {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Reference(_) => "reference",
            Self::Literal(_) => "literal",
            Self::LiteralList(_) => "literal list",
            Self::Expression(_) => "expression",
            Self::MultiExpression(_) => "multi-expression",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(inner) => write!(f, "{inner}"),
            Self::Literal(inner) => write!(f, "{inner}"),
            Self::LiteralList(inner) => write!(f, "{inner}"),
            Self::Expression(inner) => write!(f, "{inner}"),
            Self::MultiExpression(inner) => write!(f, "{inner}"),
        }
    }
}

impl From<Reference> for Operand {
    fn from(value: Reference) -> Self {
        Self::Reference(value)
    }
}

impl From<Literal> for Operand {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<LiteralList> for Operand {
    fn from(value: LiteralList) -> Self {
        Self::LiteralList(value)
    }
}

impl From<Expression> for Operand {
    fn from(value: Expression) -> Self {
        Self::Expression(Box::new(value))
    }
}

impl From<MultiExpression> for Operand {
    fn from(value: MultiExpression) -> Self {
        Self::MultiExpression(value)
    }
}

///
/// Expression
///
/// Operator applied to one operand (`NOT`, `ISNULL`, `ISNOTNULL`) or two.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    pub operator: Operator,
    pub lvalue: Operand,
    pub rvalue: Option<Operand>,
}

impl Expression {
    #[must_use]
    pub fn binary(lvalue: impl Into<Operand>, operator: Operator, rvalue: impl Into<Operand>) -> Self {
        Self {
            operator,
            lvalue: lvalue.into(),
            rvalue: Some(rvalue.into()),
        }
    }

    #[must_use]
    pub fn unary(operator: Operator, operand: impl Into<Operand>) -> Self {
        Self {
            operator,
            lvalue: operand.into(),
            rvalue: None,
        }
    }

    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::binary(self, Operator::And, other)
    }

    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::binary(self, Operator::Or, other)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(self) -> Self {
        Self::unary(Operator::Not, self)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.rvalue, self.operator) {
            (None, Operator::Not) => write!(f, "NOT ({})", self.lvalue),
            (None, op) => write!(f, "{} {op}", self.lvalue),
            (Some(rvalue), op) => write!(f, "({} {op} {rvalue})", self.lvalue),
        }
    }
}

///
/// MultiExpression
///
/// Flattened n-ary connective, as produced for a top-level conjunction.
///

#[derive(Clone, Debug, PartialEq)]
pub struct MultiExpression {
    pub operator: Operator,
    pub values: Vec<Operand>,
}

impl MultiExpression {
    #[must_use]
    pub fn and(values: impl IntoIterator<Item = Expression>) -> Self {
        Self {
            operator: Operator::And,
            values: values.into_iter().map(Operand::from).collect(),
        }
    }

    #[must_use]
    pub fn or(values: impl IntoIterator<Item = Expression>) -> Self {
        Self {
            operator: Operator::Or,
            values: values.into_iter().map(Operand::from).collect(),
        }
    }
}

impl fmt::Display for MultiExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                write!(f, " {} ", self.operator)?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}
