use docql::prelude::*;
use serde_json::json;

fn catalog() -> Catalog {
    Catalog::builder()
        .schema(
            Schema::new("dublincore", Namespace::new("http://purl.org/dc", "dc"))
                .with_field("title", FieldType::Scalar(ScalarType::String))
                .with_field("created", FieldType::Scalar(ScalarType::Date)),
        )
        .build()
        .expect("catalog")
}

#[test]
fn version_is_exported() {
    assert!(!docql::VERSION.is_empty());
}

#[test]
fn compile_uses_default_config() {
    let catalog = catalog();
    let filter = Operand::from(Reference::new("dc:title").eq("report"));
    let select = SelectClause::references(["ecm:uuid", "dc:title"]);

    let compiled = docql::compile(&catalog, &filter, &select).expect("compiled");

    assert_eq!(
        compiled.to_json().expect("json"),
        json!({
            "search": {
                "query": { "value-query": { "element": "dc.title", "text": ["report"] } },
                "options": {
                    "extract-document-data": {
                        "selected": "include-with-ancestors",
                        "extract-path": ["/document/ecm.id", "/document/dc.title"]
                    }
                }
            }
        })
    );
}

#[test]
fn errors_surface_as_bad_requests() {
    let catalog = catalog();
    let filter = Operand::from(Expression::binary(
        Reference::new("dc:title"),
        Operator::StartsWith,
        Literal::from("rep"),
    ));

    let err = docql::compile(&catalog, &filter, &SelectClause::default()).expect_err("unsupported");

    assert_eq!(err.class(), ErrorClass::Unsupported);
    assert_eq!(err.to_string(), "unsupported operator: STARTSWITH");
}

#[test]
fn catalogs_load_from_json() {
    let schemas: Vec<Schema> = serde_json::from_value(json!([
        {
            "name": "common",
            "namespace": { "uri": "http://example.com/common", "prefix": "common" },
            "fields": [
                { "name": { "prefix": "common", "local": "size" }, "type": { "scalar": "integer" } }
            ]
        }
    ]))
    .expect("schemas");
    let catalog = Catalog::from_schemas(schemas).expect("catalog");

    let filter = Operand::from(Reference::new("common:size").gt_eq(1024));
    let compiled = docql::compile(&catalog, &filter, &SelectClause::default()).expect("compiled");

    assert_eq!(
        compiled.query,
        StructuredQuery::range("common.size", ElementType::Long, RangeOperator::Ge, "1024")
    );
}
