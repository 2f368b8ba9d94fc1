//! Module: query
//! Responsibility: the parsed, engine-agnostic expression tree a query arrives as.
//! Does not own: parsing query text, or any engine-specific translation.
//! Boundary: consumed read-only by `compile`.

mod clause;
mod literal;
mod operand;
mod operator;

pub use clause::{OrderByClause, OrderByExpr, SelectClause};
pub use literal::{Literal, LiteralList, LiteralTag};
pub use operand::{Expression, MultiExpression, Operand, Reference};
pub use operator::Operator;
