use crate::{
    compile::{
        coerce::{Coerced, coerce},
        resolve::{FieldResolver, ResolvedField},
    },
    engine::{RangeOperator, StructuredQuery},
    error::CompileError,
    query::{Expression, Literal, LiteralList, MultiExpression, Operand, Operator},
};

/// Value an absent tri-state boolean is tested against.
const TRUE_TEXT: &str = "true";

///
/// Translator
///
/// Structure-preserving walk from the query tree to the engine's predicate
/// algebra. Each leaf resolves its field once; connectives recurse.
///

pub(crate) struct Translator<'a> {
    resolver: FieldResolver<'a>,
}

impl<'a> Translator<'a> {
    pub(crate) const fn new(resolver: FieldResolver<'a>) -> Self {
        Self { resolver }
    }

    pub(crate) fn translate(&self, operand: &Operand) -> Result<StructuredQuery, CompileError> {
        match operand {
            Operand::Expression(expression) => self.expression(expression),
            Operand::MultiExpression(multi) => self.multi_expression(multi),
            other => Err(CompileError::invalid_query(format!(
                "expected a boolean expression, found {} {other}",
                other.kind()
            ))),
        }
    }

    fn expression(&self, expression: &Expression) -> Result<StructuredQuery, CompileError> {
        let operator = expression.operator;

        match operator {
            Operator::Eq => self.eq(expression),
            Operator::NotEq => Ok(StructuredQuery::not(self.eq(expression)?)),
            Operator::Lt => self.range(expression, RangeOperator::Lt),
            Operator::Gt => self.range(expression, RangeOperator::Gt),
            Operator::LtEq => self.range(expression, RangeOperator::Le),
            Operator::GtEq => self.range(expression, RangeOperator::Ge),
            Operator::And | Operator::Or => self.connective(expression),
            Operator::Not => Ok(StructuredQuery::not(self.boolean_child(&expression.lvalue)?)),
            Operator::In => self.membership(expression),
            Operator::NotIn => Ok(StructuredQuery::not(self.membership(expression)?)),
            Operator::IsNull => {
                let field = self.field(&expression.lvalue)?;
                Ok(StructuredQuery::not(StructuredQuery::container_exists(
                    field.storage_path,
                )))
            }
            Operator::IsNotNull => {
                let field = self.field(&expression.lvalue)?;
                Ok(StructuredQuery::container_exists(field.storage_path))
            }
            // the rest are exactly `is_unsupported`
            _ => Err(CompileError::unsupported(operator)),
        }
    }

    fn multi_expression(&self, multi: &MultiExpression) -> Result<StructuredQuery, CompileError> {
        if !matches!(multi.operator, Operator::And | Operator::Or) {
            return Err(CompileError::invalid_query(format!(
                "multi-expression operator must be AND or OR, found {}",
                multi.operator
            )));
        }
        if multi.values.is_empty() {
            return Err(CompileError::invalid_query(format!(
                "empty {} multi-expression",
                multi.operator
            )));
        }

        let mut queries = multi
            .values
            .iter()
            .map(|value| self.boolean_child(value))
            .collect::<Result<Vec<_>, _>>()?;

        if queries.len() == 1 {
            return Ok(queries.remove(0));
        }

        Ok(combine(multi.operator, queries))
    }

    fn connective(&self, expression: &Expression) -> Result<StructuredQuery, CompileError> {
        let left = self.boolean_child(&expression.lvalue)?;
        let Some(rvalue) = &expression.rvalue else {
            return Ok(left);
        };
        let right = self.boolean_child(rvalue)?;

        Ok(combine(expression.operator, vec![left, right]))
    }

    fn eq(&self, expression: &Expression) -> Result<StructuredQuery, CompileError> {
        let field = self.field(&expression.lvalue)?;

        if field.is_mixin_types {
            return match expression.rvalue {
                Some(Operand::Literal(Literal::String(_))) => Err(CompileError::unsupported(
                    format!("equality on {}", field.logical_path),
                )),
                _ => Err(CompileError::invalid_query(format!(
                    "{} must be compared with a string",
                    field.logical_path
                ))),
            };
        }

        let literal = literal(expression)?;
        let query = match coerce(&field, literal)? {
            Coerced::Value(value) => StructuredQuery::value_eq(field.storage_path, value.serialize()),
            Coerced::Absent => {
                StructuredQuery::not(StructuredQuery::value_eq(field.storage_path, TRUE_TEXT))
            }
        };

        Ok(query)
    }

    fn range(
        &self,
        expression: &Expression,
        operator: RangeOperator,
    ) -> Result<StructuredQuery, CompileError> {
        let field = self.field(&expression.lvalue)?;
        let literal = literal(expression)?;
        let value = coerce(&field, literal)?.into_value(&field, operator.tag())?;

        Ok(StructuredQuery::range(
            field.storage_path,
            value.element_type(),
            operator,
            value.serialize(),
        ))
    }

    fn membership(&self, expression: &Expression) -> Result<StructuredQuery, CompileError> {
        let field = self.field(&expression.lvalue)?;
        let list = literal_list(expression)?;
        if list.is_empty() {
            return Err(CompileError::invalid_query(format!(
                "{} on {} needs at least one value",
                expression.operator, field.logical_path
            )));
        }

        let values = list
            .iter()
            .map(|literal| {
                coerce(&field, literal)?
                    .into_value(&field, Operator::In.tag())
                    .map(|value| value.serialize())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StructuredQuery::value_in(field.storage_path, values))
    }

    fn boolean_child(&self, operand: &Operand) -> Result<StructuredQuery, CompileError> {
        match operand {
            Operand::Expression(_) | Operand::MultiExpression(_) => self.translate(operand),
            other => Err(CompileError::invalid_query(format!(
                "boolean operand must be an expression, found {} {other}",
                other.kind()
            ))),
        }
    }

    fn field(&self, operand: &Operand) -> Result<ResolvedField, CompileError> {
        match operand {
            Operand::Reference(reference) => self.resolver.resolve(&reference.name),
            other => Err(CompileError::invalid_query(format!(
                "expected a property reference, found {} {other}",
                other.kind()
            ))),
        }
    }
}

fn combine(operator: Operator, queries: Vec<StructuredQuery>) -> StructuredQuery {
    if operator == Operator::Or {
        StructuredQuery::or(queries)
    } else {
        StructuredQuery::and(queries)
    }
}

fn literal(expression: &Expression) -> Result<&Literal, CompileError> {
    match &expression.rvalue {
        Some(Operand::Literal(literal)) => Ok(literal),
        Some(other) => Err(CompileError::invalid_query(format!(
            "{} expects a literal, found {} {other}",
            expression.operator,
            other.kind()
        ))),
        None => Err(CompileError::invalid_query(format!(
            "{} is missing its right operand",
            expression.operator
        ))),
    }
}

fn literal_list(expression: &Expression) -> Result<&LiteralList, CompileError> {
    match &expression.rvalue {
        Some(Operand::LiteralList(list)) => Ok(list),
        Some(other) => Err(CompileError::invalid_query(format!(
            "{} expects a literal list, found {} {other}",
            expression.operator,
            other.kind()
        ))),
        None => Err(CompileError::invalid_query(format!(
            "{} is missing its literal list",
            expression.operator
        ))),
    }
}

/// First operator in the tree the engine has no predicate for.
pub(crate) fn first_unsupported(operand: &Operand) -> Option<Operator> {
    match operand {
        Operand::Expression(expression) => {
            if is_unsupported(expression.operator) {
                return Some(expression.operator);
            }
            first_unsupported(&expression.lvalue)
                .or_else(|| expression.rvalue.as_ref().and_then(first_unsupported))
        }
        Operand::MultiExpression(multi) => multi.values.iter().find_map(first_unsupported),
        Operand::Reference(_) | Operand::Literal(_) | Operand::LiteralList(_) => None,
    }
}

/// Operators the engine has no predicate for.
pub(crate) const fn is_unsupported(operator: Operator) -> bool {
    matches!(
        operator,
        Operator::Sum
            | Operator::Sub
            | Operator::Mul
            | Operator::Div
            | Operator::StartsWith
            | Operator::Like
            | Operator::ILike
            | Operator::NotLike
            | Operator::NotILike
            | Operator::Between
            | Operator::NotBetween
    )
}
