//! Module: catalog
//! Responsibility: read-only name lookup over a fixed set of schemas.
//! Does not own: schema loading or mutation; a catalog is immutable once built.
//! Boundary: the query compiler only ever sees the `SchemaCatalog` trait.

use crate::{error::SchemaError, field::Field, schema::Schema};
use std::collections::{BTreeMap, BTreeSet};

///
/// SchemaCatalog
///
/// Field-type lookup capability consumed by the query compiler.
/// Implementations must be safe for unsynchronized concurrent reads.
///

pub trait SchemaCatalog: Send + Sync {
    /// Look up a top-level field by its prefixed name (`dc:title`), or by its
    /// bare name for schemas declaring no namespace prefix.
    fn field(&self, name: &str) -> Option<&Field>;

    /// Schemas whose namespace declares no prefix, in registration order.
    fn schemas_without_prefix(&self) -> Vec<&Schema>;
}

///
/// Catalog
///
/// In-memory `SchemaCatalog` built once by `CatalogBuilder`.
///

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    schemas: Vec<Schema>,
    // prefixed field name -> (schema index, field index)
    fields: BTreeMap<String, (usize, usize)>,
}

impl Catalog {
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn from_schemas(schemas: impl IntoIterator<Item = Schema>) -> Result<Self, SchemaError> {
        schemas
            .into_iter()
            .fold(CatalogBuilder::default(), CatalogBuilder::schema)
            .build()
    }

    #[must_use]
    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.iter().find(|schema| schema.name == name)
    }

    #[must_use]
    pub fn schemas(&self) -> &[Schema] {
        &self.schemas
    }
}

impl SchemaCatalog for Catalog {
    fn field(&self, name: &str) -> Option<&Field> {
        let (schema, field) = *self.fields.get(name)?;

        self.schemas.get(schema)?.fields.get(field)
    }

    fn schemas_without_prefix(&self) -> Vec<&Schema> {
        self.schemas
            .iter()
            .filter(|schema| !schema.namespace.has_prefix())
            .collect()
    }
}

///
/// CatalogBuilder
///

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    schemas: Vec<Schema>,
}

impl CatalogBuilder {
    #[must_use]
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schemas.push(schema);
        self
    }

    pub fn build(self) -> Result<Catalog, SchemaError> {
        let mut names = BTreeSet::new();
        let mut fields: BTreeMap<String, (usize, usize)> = BTreeMap::new();

        for (schema_index, schema) in self.schemas.iter().enumerate() {
            if !names.insert(schema.name.as_str()) {
                return Err(SchemaError::DuplicateSchema {
                    name: schema.name.clone(),
                });
            }

            let expected_prefix = schema
                .namespace
                .has_prefix()
                .then(|| schema.namespace.prefix.as_str());

            let mut locals = BTreeSet::new();
            for (field_index, field) in schema.fields.iter().enumerate() {
                if field.name.prefix.as_deref() != expected_prefix {
                    return Err(SchemaError::PrefixMismatch {
                        schema: schema.name.clone(),
                        field: field.name.prefixed_name(),
                    });
                }
                if !locals.insert(field.name.local.as_str()) {
                    return Err(SchemaError::DuplicateField {
                        schema: schema.name.clone(),
                        field: field.name.local.clone(),
                    });
                }

                let prefixed = field.name.prefixed_name();
                if let Some((other, _)) = fields.get(&prefixed) {
                    return Err(SchemaError::AmbiguousField {
                        field: prefixed,
                        first: self.schemas[*other].name.clone(),
                        second: schema.name.clone(),
                    });
                }
                fields.insert(prefixed, (schema_index, field_index));
            }
        }

        Ok(Catalog {
            schemas: self.schemas,
            fields,
        })
    }
}
