use docql_schema::prelude::*;

/// Catalog shared by unit tests: a prefixed dublincore schema, a prefixed
/// schema with typed scalars, and an unprefixed files schema.
pub(crate) fn catalog() -> Catalog {
    let content = ComplexType::new(
        "content",
        vec![
            Field::new("name", FieldType::Scalar(ScalarType::String)),
            Field::new("length", FieldType::Scalar(ScalarType::Integer)),
        ],
    );
    let file_entry = ComplexType::new(
        "file_entry",
        vec![
            Field::new("file", FieldType::Complex(content)),
            Field::new("filename", FieldType::Scalar(ScalarType::String)),
        ],
    );

    Catalog::builder()
        .schema(
            Schema::new("dublincore", Namespace::new("http://purl.org/dc", "dc"))
                .with_field("title", FieldType::Scalar(ScalarType::String))
                .with_field("modified", FieldType::Scalar(ScalarType::Date))
                .with_field("subjects", FieldType::list(FieldType::Scalar(ScalarType::String))),
        )
        .schema(
            Schema::new("myschema", Namespace::new("http://example.com/my", "my"))
                .with_field("flag", FieldType::Scalar(ScalarType::Boolean))
                .with_field("ratio", FieldType::Scalar(ScalarType::Double))
                .with_field("count", FieldType::Scalar(ScalarType::Integer))
                .with_field("flags", FieldType::list(FieldType::Scalar(ScalarType::Boolean))),
        )
        .schema(
            Schema::new("files", Namespace::default())
                .with_field("files", FieldType::list(FieldType::Complex(file_entry))),
        )
        .build()
        .expect("fixture catalog")
}
