//! Module: compile
//! Responsibility: the single entry point from a query tree plus select list
//! to a compiled engine query.
//! Does not own: query parsing, execution, or result decoding.
//! Boundary: pure over its inputs; the only shared state is the catalog.

mod coerce;
mod translate;

pub mod resolve;


use crate::{
    config::{CompilerConfig, ConfigError},
    engine::{SearchRequest, StructuredQuery},
    error::CompileError,
    obs::sink::Span,
    query::{OrderByClause, Operand, SelectClause},
};
use docql_schema::prelude::SchemaCatalog;
use resolve::{FieldResolver, PATH_SEPARATOR, ResolvedField};
use tracing::instrument;
use translate::{Translator, first_unsupported};

///
/// PathResolver
///
/// Maps a repository path to a document id, for path-valued predicates.
/// Accepted by the compiler; no supported predicate consults it yet.
///

pub trait PathResolver {
    fn id_for_path(&self, path: &str) -> Option<String>;
}

///
/// CompileRequest
///

#[derive(Clone, Copy)]
pub struct CompileRequest<'a> {
    pub filter: &'a Operand,
    pub select: &'a SelectClause,
    pub order_by: Option<&'a OrderByClause>,
    pub path_resolver: Option<&'a dyn PathResolver>,
}

impl<'a> CompileRequest<'a> {
    #[must_use]
    pub const fn new(filter: &'a Operand, select: &'a SelectClause) -> Self {
        Self {
            filter,
            select,
            order_by: None,
            path_resolver: None,
        }
    }

    #[must_use]
    pub const fn order_by(mut self, order_by: &'a OrderByClause) -> Self {
        self.order_by = Some(order_by);
        self
    }

    #[must_use]
    pub const fn path_resolver(mut self, path_resolver: &'a dyn PathResolver) -> Self {
        self.path_resolver = Some(path_resolver);
        self
    }
}

///
/// CompiledQuery
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompiledQuery {
    pub query: StructuredQuery,

    /// Absolute document paths to extract, in select order.
    pub extract_paths: Vec<String>,
}

impl CompiledQuery {
    #[must_use]
    pub fn to_request(&self) -> SearchRequest {
        SearchRequest::new(self.query.clone(), self.extract_paths.clone())
    }

    #[must_use]
    pub fn into_request(self) -> SearchRequest {
        SearchRequest::new(self.query, self.extract_paths)
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        self.to_request().to_json()
    }
}

///
/// QueryCompiler
///
/// Compiles query trees against one schema catalog. Cheap to construct and
/// holds no per-compile state, so one compiler may serve any number of calls.
///

pub struct QueryCompiler<'a> {
    catalog: &'a dyn SchemaCatalog,
    config: CompilerConfig,
}

impl<'a> QueryCompiler<'a> {
    #[must_use]
    pub fn new(catalog: &'a dyn SchemaCatalog, config: CompilerConfig) -> Self {
        Self { catalog, config }
    }

    /// Build a compiler from a TOML config document.
    pub fn from_toml(catalog: &'a dyn SchemaCatalog, source: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(catalog, CompilerConfig::from_toml_str(source)?))
    }

    #[must_use]
    pub const fn config(&self) -> &CompilerConfig {
        &self.config
    }

    #[must_use]
    pub fn resolver(&self) -> FieldResolver<'_> {
        FieldResolver::new(self.catalog, &self.config)
    }

    /// Compile a filter and select list into an engine query.
    ///
    /// Projections are resolved first, so a bad select list is reported
    /// ahead of any filter error. The ordering clause and path resolver are
    /// accepted and ignored.
    #[instrument(
        name = "docql::compile",
        level = "debug",
        skip(self, request),
        fields(filter = %request.filter, fulltext_disabled = self.config.fulltext_search_disabled)
    )]
    pub fn compile(&self, request: &CompileRequest<'_>) -> Result<CompiledQuery, CompileError> {
        let span = Span::new();

        match self.compile_request(request) {
            Ok(compiled) => {
                span.finish(u64::try_from(compiled.query.leaf_count()).unwrap_or(u64::MAX));
                Ok(compiled)
            }
            Err(err) => {
                tracing::debug!(kind = err.kind(), class = %err.class(), error = %err, "query rejected");
                span.reject(err.kind());
                Err(err)
            }
        }
    }

    /// Whether any projected path addresses list elements through a wildcard.
    pub fn has_projection_wildcard(&self, select: &SelectClause) -> Result<bool, CompileError> {
        let fields = self.projection_fields(select)?;

        Ok(fields.iter().any(|field| field.has_wildcard))
    }

    fn compile_request(&self, request: &CompileRequest<'_>) -> Result<CompiledQuery, CompileError> {
        if let Some(order_by) = request.order_by.filter(|order_by| !order_by.is_empty()) {
            tracing::debug!(terms = order_by.elements.len(), "ordering clause ignored");
        }

        let root = self.config.document_root();
        let extract_paths = self
            .projection_fields(request.select)?
            .into_iter()
            .map(|field| format!("{root}{PATH_SEPARATOR}{}", field.storage_path))
            .collect();

        if let Some(operator) = first_unsupported(request.filter) {
            return Err(CompileError::unsupported(operator));
        }
        let query = Translator::new(self.resolver()).translate(request.filter)?;

        Ok(CompiledQuery {
            query,
            extract_paths,
        })
    }

    fn projection_fields(&self, select: &SelectClause) -> Result<Vec<ResolvedField>, CompileError> {
        let resolver = self.resolver();

        select
            .elements
            .iter()
            .map(|element| match element {
                Operand::Reference(reference) => resolver.resolve(&reference.name),
                other => Err(CompileError::invalid_query(format!(
                    "only properties can be selected, found {} {other}",
                    other.kind()
                ))),
            })
            .collect()
    }
}
