use crate::error::CompileError;
use std::{fmt, str::FromStr};

///
/// Operator
///
/// Every operator the query language can produce. Which of them the
/// engine can express is decided by the translator, not here.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operator {
    Sum,
    Sub,
    Mul,
    Div,
    Lt,
    Gt,
    Eq,
    NotEq,
    LtEq,
    GtEq,
    And,
    Not,
    Or,
    Like,
    ILike,
    In,
    Between,
    NotLike,
    NotILike,
    NotIn,
    NotBetween,
    IsNull,
    IsNotNull,
    StartsWith,
}

impl Operator {
    pub const ALL: [Self; 24] = [
        Self::Sum,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Lt,
        Self::Gt,
        Self::Eq,
        Self::NotEq,
        Self::LtEq,
        Self::GtEq,
        Self::And,
        Self::Not,
        Self::Or,
        Self::Like,
        Self::ILike,
        Self::In,
        Self::Between,
        Self::NotLike,
        Self::NotILike,
        Self::NotIn,
        Self::NotBetween,
        Self::IsNull,
        Self::IsNotNull,
        Self::StartsWith,
    ];

    /// Query-language tag for this operator.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Sum => "SUM",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Eq => "EQ",
            Self::NotEq => "NOTEQ",
            Self::LtEq => "LTEQ",
            Self::GtEq => "GTEQ",
            Self::And => "AND",
            Self::Not => "NOT",
            Self::Or => "OR",
            Self::Like => "LIKE",
            Self::ILike => "ILIKE",
            Self::In => "IN",
            Self::Between => "BETWEEN",
            Self::NotLike => "NOTLIKE",
            Self::NotILike => "NOTILIKE",
            Self::NotIn => "NOTIN",
            Self::NotBetween => "NOTBETWEEN",
            Self::IsNull => "ISNULL",
            Self::IsNotNull => "ISNOTNULL",
            Self::StartsWith => "STARTSWITH",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Operator {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();

        Self::ALL
            .into_iter()
            .find(|op| op.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| CompileError::unknown_operator(tag))
    }
}
