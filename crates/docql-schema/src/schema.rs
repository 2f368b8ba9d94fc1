use crate::{field::Field, types::FieldType};
use serde::{Deserialize, Serialize};

///
/// Namespace
///
/// XML-style namespace a schema declares. An empty prefix means fields of
/// the schema are addressed by their bare local name.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Namespace {
    pub uri: String,

    #[serde(default)]
    pub prefix: String,
}

impl Namespace {
    #[must_use]
    pub fn new(uri: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            prefix: prefix.into(),
        }
    }

    #[must_use]
    pub fn has_prefix(&self) -> bool {
        !self.prefix.trim().is_empty()
    }
}

///
/// Schema
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Schema {
    pub name: String,

    #[serde(default)]
    pub namespace: Namespace,

    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Schema {
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: Namespace) -> Self {
        Self {
            name: name.into(),
            namespace,
            fields: Vec::new(),
        }
    }

    /// Add a field qualified with this schema's namespace prefix.
    #[must_use]
    pub fn with_field(mut self, local: impl Into<String>, field_type: FieldType) -> Self {
        let field = if self.namespace.has_prefix() {
            Field::prefixed(self.namespace.prefix.clone(), local, field_type)
        } else {
            Field::new(local, field_type)
        };
        self.fields.push(field);

        self
    }

    /// Find a top-level field by local name.
    #[must_use]
    pub fn field(&self, local: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.local == local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScalarType;

    #[test]
    fn with_field_applies_namespace_prefix() {
        let schema = Schema::new("dublincore", Namespace::new("http://purl.org/dc", "dc"))
            .with_field("title", FieldType::Scalar(ScalarType::String));

        let field = schema.field("title").expect("title field");
        assert_eq!(field.name.prefixed_name(), "dc:title");
    }

    #[test]
    fn blank_prefix_counts_as_no_prefix() {
        assert!(!Namespace::new("urn:files", " ").has_prefix());
        assert!(!Namespace::default().has_prefix());
        assert!(Namespace::new("urn:dc", "dc").has_prefix());
    }
}
