//! ## Crate layout
//! - `core`: query model, field resolver, translator, engine predicates,
//!   config, and observability.
//! - `schema`: document schema model and the catalog the compiler reads.
//!
//! The `prelude` module exposes everything needed to build a catalog, write
//! a query tree, and compile it.

pub use docql_core as core;
pub use docql_schema as schema;

pub use docql_core::error::CompileError as Error;

use docql_core::prelude::{
    CompileRequest, CompiledQuery, CompilerConfig, Operand, QueryCompiler, SelectClause,
};
use docql_schema::prelude::SchemaCatalog;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compile `filter` and `select` against `catalog` with the default config.
pub fn compile(
    catalog: &dyn SchemaCatalog,
    filter: &Operand,
    select: &SelectClause,
) -> Result<CompiledQuery, Error> {
    QueryCompiler::new(catalog, CompilerConfig::default())
        .compile(&CompileRequest::new(filter, select))
}

///
/// Prelude
///

pub mod prelude {
    pub use docql_core::prelude::*;
    pub use docql_schema::prelude::*;
}
