//! Module: compile::resolve
//! Responsibility: turn a query property path into the engine's storage key
//! plus the type facts the translator needs.
//! Does not own: literal coercion or predicate construction.
//! Boundary: reads the schema catalog; never mutates it.

mod path;
mod system;

#[cfg(test)]
mod tests;

pub use path::{
    PATH_SEPARATOR, WILDCARD, canonical_path, has_wildcard, is_index_segment, is_wildcard_segment,
};
pub use system::{KEY_ID, KEY_MIXIN_TYPES, SYSTEM_PREFIX, SystemProperty};

use crate::{
    config::CompilerConfig,
    engine::serialize_key,
    error::CompileError,
    obs::sink::{self, MetricsEvent},
};
use docql_schema::prelude::{Field, FieldType, NAMESPACE_SEPARATOR, ScalarType, SchemaCatalog};
use std::fmt;

///
/// DeclaredType
///
/// What the resolver knows about the type at the end of a path.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeclaredType {
    Scalar(ScalarType),
    List,
    Complex,
    Unresolved,
}

impl DeclaredType {
    #[must_use]
    pub const fn of(field_type: &FieldType) -> Self {
        match field_type {
            FieldType::Scalar(scalar) => Self::Scalar(*scalar),
            FieldType::List(_) => Self::List,
            FieldType::Complex(_) => Self::Complex,
        }
    }

    #[must_use]
    pub const fn is_boolean(self) -> bool {
        matches!(self, Self::Scalar(ScalarType::Boolean))
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => write!(f, "{scalar}"),
            Self::List => f.write_str("list"),
            Self::Complex => f.write_str("complex"),
            Self::Unresolved => f.write_str("unresolved"),
        }
    }
}

///
/// ResolvedField
///
/// Per-leaf resolution result; produced once and consumed by the translator.
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[expect(clippy::struct_excessive_bools)]
pub struct ResolvedField {
    /// Canonical query path.
    pub logical_path: String,

    /// Serialized storage key the engine indexes.
    pub storage_path: String,

    pub declared_type: DeclaredType,
    pub has_wildcard: bool,

    /// User boolean fields store only `true`; false and null both read as
    /// absence, so integer literals remap onto presence tests.
    pub is_true_or_null_boolean: bool,

    pub is_mixin_types: bool,
    pub is_system: bool,
}

///
/// FieldResolver
///

#[derive(Clone, Copy)]
pub struct FieldResolver<'a> {
    catalog: &'a dyn SchemaCatalog,
    separator: &'a str,
}

impl<'a> FieldResolver<'a> {
    #[must_use]
    pub fn new(catalog: &'a dyn SchemaCatalog, config: &'a CompilerConfig) -> Self {
        Self {
            catalog,
            separator: config.namespace_separator.as_str(),
        }
    }

    pub fn resolve(&self, path: &str) -> Result<ResolvedField, CompileError> {
        let logical_path = canonical_path(path);

        let resolved = if logical_path.starts_with(SYSTEM_PREFIX) {
            self.resolve_system(logical_path)?
        } else {
            self.resolve_user(logical_path)?
        };

        tracing::trace!(
            path,
            storage = %resolved.storage_path,
            declared = %resolved.declared_type,
            wildcard = resolved.has_wildcard,
            "resolved field"
        );
        sink::record(MetricsEvent::FieldResolved {
            system: resolved.is_system,
        });

        Ok(resolved)
    }

    fn resolve_system(&self, logical_path: String) -> Result<ResolvedField, CompileError> {
        let property = system::lookup(&logical_path)?;
        let storage_path = serialize_key(property.key, self.separator);

        Ok(ResolvedField {
            has_wildcard: has_wildcard(&storage_path),
            is_mixin_types: property.key == KEY_MIXIN_TYPES,
            storage_path,
            declared_type: property.declared_type,
            is_true_or_null_boolean: false,
            is_system: true,
            logical_path,
        })
    }

    fn resolve_user(&self, logical_path: String) -> Result<ResolvedField, CompileError> {
        let unknown = || CompileError::unknown_property(&logical_path);

        let trimmed = logical_path.trim_end_matches(PATH_SEPARATOR);
        let mut segments = trimmed.split(PATH_SEPARATOR);
        let head = segments.next().unwrap_or_default();
        let field = self.top_level_field(head).ok_or_else(unknown)?;

        let mut keys = vec![field.name.prefixed_name()];
        let mut cursor = &field.field_type;
        for segment in segments {
            cursor = if is_index_segment(segment) || is_wildcard_segment(segment) {
                cursor.element_type().ok_or_else(unknown)?
            } else {
                &cursor.sub_field(segment).ok_or_else(unknown)?.field_type
            };
            keys.push(segment.to_string());
        }

        let storage_path = serialize_key(&keys.join("."), self.separator);

        Ok(ResolvedField {
            has_wildcard: has_wildcard(&storage_path),
            is_mixin_types: false,
            storage_path,
            declared_type: DeclaredType::of(cursor),
            is_true_or_null_boolean: cursor.is_boolean(),
            is_system: false,
            logical_path,
        })
    }

    fn top_level_field(&self, name: &str) -> Option<&'a Field> {
        let catalog = self.catalog;
        if let Some(field) = catalog.field(name) {
            return Some(field);
        }
        if name.contains(NAMESPACE_SEPARATOR) {
            return None;
        }

        catalog
            .schemas_without_prefix()
            .into_iter()
            .find_map(|schema| schema.field(name))
    }
}
