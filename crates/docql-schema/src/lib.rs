//! Document schema model for docql: structural field types, namespaced
//! schemas, and the read-only catalog the query compiler resolves against.

pub mod catalog;
pub mod error;
pub mod field;
pub mod schema;
pub mod types;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        catalog::{Catalog, CatalogBuilder, SchemaCatalog},
        error::SchemaError,
        field::{Field, NAMESPACE_SEPARATOR, QualifiedName},
        schema::{Namespace, Schema},
        types::{ComplexType, FieldType, ScalarType},
    };
}
