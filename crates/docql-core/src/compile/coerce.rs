use crate::{
    compile::resolve::ResolvedField, engine::EngineValue, error::CompileError, query::Literal,
};

///
/// Coerced
///
/// Literal after coercion against a resolved field. `Absent` is the tri-state
/// boolean "false or null" case and has no engine value of its own.
///

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Coerced {
    Value(EngineValue),
    Absent,
}

impl Coerced {
    /// The engine value, or `InvalidLiteral` when `operator` cannot express
    /// an absence test.
    pub(crate) fn into_value(self, field: &ResolvedField, operator: &str) -> Result<EngineValue, CompileError> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Absent => Err(CompileError::invalid_literal(format!(
                "0 on boolean field {} is only valid with = or <>, not {operator}",
                field.logical_path
            ))),
        }
    }
}

pub(crate) fn coerce(field: &ResolvedField, literal: &Literal) -> Result<Coerced, CompileError> {
    let value = match literal {
        Literal::Boolean(value) => EngineValue::Boolean(*value),
        Literal::Date(value) => EngineValue::Date(*value),
        Literal::Double(value) => EngineValue::Double(*value),
        Literal::Integer(value) if field.declared_type.is_boolean() => {
            return integer_as_boolean(field, *value);
        }
        Literal::Integer(value) => EngineValue::Long(*value),
        Literal::String(value) => EngineValue::String(value.clone()),
    };

    Ok(Coerced::Value(value))
}

// 0/1 stand in for booleans; tri-state fields only ever store `true`
fn integer_as_boolean(field: &ResolvedField, value: i64) -> Result<Coerced, CompileError> {
    match (value, field.is_true_or_null_boolean) {
        (0, true) => Ok(Coerced::Absent),
        (0, false) => Ok(Coerced::Value(EngineValue::Boolean(false))),
        (1, _) => Ok(Coerced::Value(EngineValue::Boolean(true))),
        _ => Err(CompileError::invalid_literal(format!(
            "boolean field {} compared with {value}, expected 0 or 1",
            field.logical_path
        ))),
    }
}
