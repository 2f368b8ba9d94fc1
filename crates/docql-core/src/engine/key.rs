use docql_schema::prelude::NAMESPACE_SEPARATOR;

/// Rewrite a dotted storage path into the key form the engine indexes.
///
/// The schema namespace separator is reserved by the engine and is replaced
/// with `separator`; every other character passes through unchanged.
#[must_use]
pub fn serialize_key(key: &str, separator: &str) -> String {
    key.replace(NAMESPACE_SEPARATOR, separator)
}
