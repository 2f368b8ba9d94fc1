use super::*;
use crate::test_support;
use docql_schema::prelude::Catalog;

fn resolve_with(catalog: &Catalog, config: &CompilerConfig, path: &str) -> Result<ResolvedField, CompileError> {
    FieldResolver::new(catalog, config).resolve(path)
}

fn resolve(path: &str) -> Result<ResolvedField, CompileError> {
    resolve_with(&test_support::catalog(), &CompilerConfig::default(), path)
}

#[test]
fn prefixed_scalar_serializes_namespace_separator() {
    let field = resolve("dc:title").expect("dc:title");

    assert_eq!(field.logical_path, "dc:title");
    assert_eq!(field.storage_path, "dc.title");
    assert_eq!(field.declared_type, DeclaredType::Scalar(ScalarType::String));
    assert!(!field.has_wildcard);
    assert!(!field.is_true_or_null_boolean);
    assert!(!field.is_system);
}

#[test]
fn configured_separator_is_used_for_keys() {
    let config = CompilerConfig {
        namespace_separator: "__".to_string(),
        ..CompilerConfig::default()
    };

    let field = resolve_with(&test_support::catalog(), &config, "dc:title").expect("dc:title");
    assert_eq!(field.storage_path, "dc__title");

    let system = resolve_with(&test_support::catalog(), &config, "ecm:mixinType").expect("mixin");
    assert_eq!(system.storage_path, "ecm__mixinTypes");
    assert!(system.is_mixin_types);
}

#[test]
fn leading_slash_is_ignored() {
    assert_eq!(resolve("/dc:title"), resolve("dc:title"));
}

#[test]
fn bracket_and_slash_list_indexes_resolve_identically() {
    let bracketed = resolve("files[3]/file/name").expect("bracketed");
    let slashed = resolve("files/3/file/name").expect("slashed");

    assert_eq!(bracketed, slashed);
    assert_eq!(slashed.storage_path, "files.3.file.name");
    assert_eq!(slashed.declared_type, DeclaredType::Scalar(ScalarType::String));
    assert!(!slashed.has_wildcard);
}

#[test]
fn element_name_index_form_is_an_unknown_property() {
    assert!(matches!(
        resolve("files/item[3]/file"),
        Err(CompileError::UnknownProperty { .. })
    ));
    assert!(matches!(
        resolve("files/item[*]/file/name"),
        Err(CompileError::UnknownProperty { .. })
    ));
}

#[test]
fn wildcard_segments_mark_the_field() {
    let field = resolve("files/*/file/length").expect("wildcard");
    assert_eq!(field.storage_path, "files.*.file.length");
    assert_eq!(field.declared_type, DeclaredType::Scalar(ScalarType::Integer));
    assert!(field.has_wildcard);

    let numbered = resolve("files/*1/filename").expect("numbered wildcard");
    assert_eq!(numbered.storage_path, "files.*1.filename");
    assert!(numbered.has_wildcard);

    let list = resolve("dc:subjects/*").expect("scalar list wildcard");
    assert_eq!(list.storage_path, "dc.subjects.*");
    assert!(list.has_wildcard);
}

#[test]
fn list_field_itself_resolves_as_list() {
    let field = resolve("dc:subjects").expect("subjects");

    assert_eq!(field.declared_type, DeclaredType::List);
    assert!(!field.is_true_or_null_boolean);
}

#[test]
fn user_booleans_are_tri_state() {
    assert!(resolve("my:flag").expect("flag").is_true_or_null_boolean);
    assert!(resolve("my:flags/0").expect("flag element").is_true_or_null_boolean);
    assert!(!resolve("my:flags").expect("flag list").is_true_or_null_boolean);
}

#[test]
fn system_fields_are_never_tri_state() {
    let field = resolve("ecm:isProxy").expect("isProxy");

    assert!(field.is_system);
    assert!(field.declared_type.is_boolean());
    assert!(!field.is_true_or_null_boolean);
    assert_eq!(field.storage_path, "ecm.isProxy");
}

#[test]
fn system_aliases_resolve_to_internal_keys() {
    assert_eq!(resolve("ecm:uuid").expect("uuid").storage_path, "ecm.id");
    assert_eq!(
        resolve("ecm:currentLifeCycleState").expect("state").storage_path,
        "ecm.lifeCycleState"
    );
    assert!(resolve("ecm:mixinType").expect("mixin").is_mixin_types);
    assert!(!resolve("ecm:primaryType").expect("type").is_mixin_types);
}

#[test]
fn unprefixed_schema_fields_resolve_by_bare_name() {
    let field = resolve("files/0/filename").expect("files");

    assert_eq!(field.storage_path, "files.0.filename");
}

#[test]
fn unknown_paths_are_rejected() {
    for path in [
        "dc:nope",
        "nope",
        "nope:title",
        "dc:title/0",
        "dc:title/sub",
        "files/name",
        "files/0/nope",
        "files/0/file/name/0",
        "ecm:nope",
    ] {
        assert!(
            matches!(resolve(path), Err(CompileError::UnknownProperty { .. })),
            "{path}"
        );
    }
}

#[test]
fn unsupported_system_paths_are_rejected() {
    for path in ["ecm:acl", "ecm:acl/*1/principal", "ecm:fulltext", "ecm:path"] {
        assert!(
            matches!(resolve(path), Err(CompileError::UnsupportedOperator { .. })),
            "{path}"
        );
    }
}

#[test]
fn resolution_is_counted_per_field() {
    crate::obs::metrics_reset_all();

    resolve("dc:title").expect("user");
    resolve("ecm:id").expect("system");
    let _ = resolve("dc:nope");

    let counters = crate::obs::metrics_report(None).counters.expect("counters");
    assert_eq!(counters.ops.fields_resolved, 2);
    assert_eq!(counters.ops.system_fields_resolved, 1);
}
