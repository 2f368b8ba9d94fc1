use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Catalog construction failures. A catalog that builds successfully is
/// unambiguous for every lookup the query compiler performs.
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("duplicate schema '{name}'")]
    DuplicateSchema { name: String },

    #[error("schema '{schema}' declares field '{field}' twice")]
    DuplicateField { schema: String, field: String },

    #[error("field '{field}' is declared by both '{first}' and '{second}'")]
    AmbiguousField {
        field: String,
        first: String,
        second: String,
    },

    #[error("field '{field}' does not use the namespace prefix of schema '{schema}'")]
    PrefixMismatch { schema: String, field: String },
}
