use docql_core::prelude::*;
use docql_schema::prelude::*;
use serde_json::json;
use std::{sync::Arc, thread};

fn catalog() -> Catalog {
    let attachment = ComplexType::new(
        "attachment",
        vec![
            Field::new("name", FieldType::Scalar(ScalarType::String)),
            Field::new("size", FieldType::Scalar(ScalarType::Integer)),
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
            Schema::new("note", Namespace::new("http://example.com/note", "note"))
                .with_field("pinned", FieldType::Scalar(ScalarType::Boolean))
                .with_field("attachments", FieldType::list(FieldType::Complex(attachment))),
        )
        .build()
        .expect("catalog")
}

fn compile(
    compiler: &QueryCompiler<'_>,
    filter: impl Into<Operand>,
    select: &[&str],
) -> Result<CompiledQuery, CompileError> {
    let filter = filter.into();
    let select = SelectClause::references(select.iter().copied());

    compiler.compile(&CompileRequest::new(&filter, &select))
}

#[test]
fn primary_type_scenario_produces_the_full_request() {
    let catalog = catalog();
    let compiler = QueryCompiler::new(&catalog, CompilerConfig::default());
    let types: LiteralList = ["File", "Note"].into_iter().collect();

    let compiled = compile(
        &compiler,
        MultiExpression::and([Reference::new("ecm:primaryType").in_list(types)]),
        &["ecm:uuid"],
    )
    .expect("compiled");

    assert_eq!(
        compiled.into_request().to_json().expect("json"),
        json!({
            "search": {
                "query": {
                    "value-query": { "element": "ecm.primaryType", "text": ["File", "Note"] }
                },
                "options": {
                    "extract-document-data": {
                        "selected": "include-with-ancestors",
                        "extract-path": ["/document/ecm.id"]
                    }
                }
            }
        })
    );
}

#[test]
fn compound_filter_serializes_every_predicate_kind() {
    let catalog = catalog();
    let compiler = QueryCompiler::new(&catalog, CompilerConfig::default());
    let modified = Literal::parse("date", "2024-05-01T00:00:00+02:00").expect("date");

    let filter = MultiExpression::and([
        Reference::new("dc:title").not_eq("draft"),
        Reference::new("dc:modified").gt_eq(modified),
        Reference::new("note:pinned").eq(0),
        Reference::new("note:attachments[*]/size").lt(1_000_000),
        Reference::new("dc:subjects").is_not_null(),
    ]);

    let compiled = compile(&compiler, filter, &["dc:title", "note:attachments/*/name"]).expect("compiled");

    assert_eq!(
        compiled.to_json().expect("json")["search"]["query"],
        json!({
            "and-query": { "queries": [
                { "not-query": { "value-query": { "element": "dc.title", "text": ["draft"] } } },
                { "range-query": {
                    "element": "dc.modified",
                    "type": "xs:dateTime",
                    "range-operator": "GE",
                    "value": "2024-04-30T22:00:00Z"
                } },
                { "not-query": { "value-query": { "element": "note.pinned", "text": ["true"] } } },
                { "range-query": {
                    "element": "note.attachments.*.size",
                    "type": "xs:long",
                    "range-operator": "LT",
                    "value": "1000000"
                } },
                { "container-query": {
                    "element": "dc.subjects",
                    "query": { "and-query": { "queries": [] } }
                } }
            ] }
        })
    );
    assert_eq!(
        compiled.extract_paths,
        vec!["/document/dc.title", "/document/note.attachments.*.name"]
    );
    assert!(
        compiler
            .has_projection_wildcard(&SelectClause::references(["note:attachments/*/name"]))
            .expect("wildcard check")
    );
}

#[test]
fn toml_config_changes_keys_and_root() {
    let catalog = catalog();
    let compiler = QueryCompiler::from_toml(
        &catalog,
        r#"
        document_root_path = "/doc"
        namespace_separator = "__"
        "#,
    )
    .expect("config");

    let compiled = compile(&compiler, Reference::new("dc:title").eq("x"), &["ecm:uuid"]).expect("compiled");

    assert_eq!(compiled.query, StructuredQuery::value_eq("dc__title", "x"));
    assert_eq!(compiled.extract_paths, vec!["/doc/ecm__id"]);
}

#[test]
fn invalid_toml_config_is_rejected() {
    let catalog = catalog();

    assert!(matches!(
        QueryCompiler::from_toml(&catalog, r#"document_root_path = "doc""#),
        Err(ConfigError::Invalid { .. })
    ));
    assert!(matches!(
        QueryCompiler::from_toml(&catalog, "namespace_separator = 3"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn operator_and_literal_tags_parse_at_the_boundary() {
    let catalog = catalog();
    let compiler = QueryCompiler::new(&catalog, CompilerConfig::default());

    let operator: Operator = "noteq".parse().expect("operator");
    let literal = Literal::parse("string", "x").expect("literal");
    let compiled = compile(
        &compiler,
        Expression::binary(Reference::new("dc:title"), operator, literal),
        &[],
    )
    .expect("compiled");
    assert_eq!(
        compiled.query,
        StructuredQuery::not(StructuredQuery::value_eq("dc.title", "x"))
    );

    assert!(matches!(
        "MATCHES".parse::<Operator>(),
        Err(CompileError::UnknownOperator { .. })
    ));
    assert!(matches!(
        Literal::parse("geometry", "POINT(0 0)"),
        Err(CompileError::InvalidLiteral { .. })
    ));
}

#[test]
fn rejected_queries_are_classed_for_callers() {
    let catalog = catalog();
    let compiler = QueryCompiler::new(&catalog, CompilerConfig::default());

    let unknown = compile(&compiler, Reference::new("dc:nope").eq("x"), &[]).expect_err("unknown");
    assert_eq!(unknown.class(), ErrorClass::InvalidInput);
    assert_eq!(unknown.to_string(), "no such property: dc:nope");

    let like = compile(
        &compiler,
        Expression::binary(Reference::new("dc:title"), Operator::Like, Literal::from("a%")),
        &[],
    )
    .expect_err("like");
    assert_eq!(like.class(), ErrorClass::Unsupported);
}

#[test]
fn compilers_share_one_catalog_across_threads() {
    let catalog = Arc::new(catalog());

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let compiler = QueryCompiler::new(catalog.as_ref(), CompilerConfig::default());
                compile(&compiler, Reference::new("dc:title").eq(format!("t{index}")), &[])
                    .expect("compiled")
                    .query
            })
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().expect("thread"),
            StructuredQuery::value_eq("dc.title", format!("t{index}"))
        );
    }
}
