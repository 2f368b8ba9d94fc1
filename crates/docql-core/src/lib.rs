//! docql-core: compiles schema-typed query expression trees into the
//! structured-query algebra of a document search engine.

pub mod compile;
pub mod config;
pub mod engine;
pub mod error;
pub mod obs;
pub mod query;

#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        compile::{
            CompileRequest, CompiledQuery, PathResolver, QueryCompiler,
            resolve::{DeclaredType, FieldResolver, ResolvedField, canonical_path},
        },
        config::{CompilerConfig, ConfigError},
        engine::{ElementType, EngineValue, RangeOperator, SearchRequest, StructuredQuery},
        error::{CompileError, ErrorClass},
        query::{
            Expression, Literal, LiteralList, LiteralTag, MultiExpression, Operand, Operator,
            OrderByClause, OrderByExpr, Reference, SelectClause,
        },
    };
}
