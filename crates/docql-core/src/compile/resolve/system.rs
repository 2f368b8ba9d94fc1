use crate::{compile::resolve::DeclaredType, error::CompileError};
use docql_schema::prelude::ScalarType;

/// Prefix shared by every system property.
pub const SYSTEM_PREFIX: &str = "ecm:";

/// Internal key of the document identifier.
pub const KEY_ID: &str = "ecm:id";

/// Internal key of the mixin (facet) list.
pub const KEY_MIXIN_TYPES: &str = "ecm:mixinTypes";

///
/// SystemProperty
///
/// One row of the system property table.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SystemProperty {
    pub key: &'static str,
    pub declared_type: DeclaredType,
}

impl SystemProperty {
    const fn untyped(key: &'static str) -> Self {
        Self {
            key,
            declared_type: DeclaredType::Unresolved,
        }
    }

    const fn typed(key: &'static str, scalar: ScalarType) -> Self {
        Self {
            key,
            declared_type: DeclaredType::Scalar(scalar),
        }
    }
}

/// Look up a system property by query name or internal key.
pub fn lookup(name: &str) -> Result<SystemProperty, CompileError> {
    let property = match name {
        "ecm:uuid" | "ecm:id" => SystemProperty::untyped(KEY_ID),
        "ecm:parentId" => SystemProperty::untyped("ecm:parentId"),
        "ecm:name" => SystemProperty::untyped("ecm:name"),
        "ecm:pos" => SystemProperty::typed("ecm:pos", ScalarType::Integer),
        "ecm:primaryType" => SystemProperty::untyped("ecm:primaryType"),
        "ecm:mixinType" | "ecm:mixinTypes" => SystemProperty::untyped(KEY_MIXIN_TYPES),
        "ecm:currentLifeCycleState" | "ecm:lifeCycleState" => {
            SystemProperty::untyped("ecm:lifeCycleState")
        }
        "ecm:lifeCyclePolicy" => SystemProperty::untyped("ecm:lifeCyclePolicy"),
        "ecm:isProxy" => SystemProperty::typed("ecm:isProxy", ScalarType::Boolean),
        "ecm:isVersion" => SystemProperty::typed("ecm:isVersion", ScalarType::Boolean),
        "ecm:isCheckedIn" => SystemProperty::typed("ecm:isCheckedIn", ScalarType::Boolean),
        "ecm:isLatestVersion" => {
            SystemProperty::typed("ecm:isLatestVersion", ScalarType::Boolean)
        }
        "ecm:isLatestMajorVersion" => {
            SystemProperty::typed("ecm:isLatestMajorVersion", ScalarType::Boolean)
        }
        "ecm:versionLabel" => SystemProperty::untyped("ecm:versionLabel"),
        "ecm:versionDescription" => SystemProperty::untyped("ecm:versionDescription"),
        "ecm:versionVersionableId" => SystemProperty::untyped("ecm:versionVersionableId"),
        "ecm:proxyTargetId" => SystemProperty::untyped("ecm:proxyTargetId"),
        "ecm:proxyVersionableId" => SystemProperty::untyped("ecm:proxyVersionableId"),
        "ecm:lockOwner" => SystemProperty::untyped("ecm:lockOwner"),
        "ecm:lockCreated" => SystemProperty::typed("ecm:lockCreated", ScalarType::Date),
        "ecm:ancestorId" | "ecm:ancestorIds" => SystemProperty::untyped("ecm:ancestorIds"),
        "ecm:fulltextJobId" => SystemProperty::untyped("ecm:fulltextJobId"),

        // predicates the engine side does not model yet
        "ecm:acl" | "ecm:path" => return Err(CompileError::unsupported(name)),
        _ if name.starts_with("ecm:acl/") || name.starts_with("ecm:fulltext") => {
            return Err(CompileError::unsupported(name));
        }

        _ => return Err(CompileError::unknown_property(name)),
    };

    Ok(property)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_share_internal_keys() {
        assert_eq!(lookup("ecm:uuid").unwrap().key, KEY_ID);
        assert_eq!(lookup("ecm:id").unwrap().key, KEY_ID);
        assert_eq!(lookup("ecm:mixinType").unwrap().key, KEY_MIXIN_TYPES);
        assert_eq!(
            lookup("ecm:currentLifeCycleState").unwrap().key,
            "ecm:lifeCycleState"
        );
        assert_eq!(lookup("ecm:ancestorId").unwrap().key, "ecm:ancestorIds");
    }

    #[test]
    fn flags_and_counters_carry_declared_types() {
        assert!(lookup("ecm:isProxy").unwrap().declared_type.is_boolean());
        assert!(lookup("ecm:isLatestMajorVersion").unwrap().declared_type.is_boolean());
        assert_eq!(
            lookup("ecm:pos").unwrap().declared_type,
            DeclaredType::Scalar(ScalarType::Integer)
        );
        assert_eq!(
            lookup("ecm:primaryType").unwrap().declared_type,
            DeclaredType::Unresolved
        );
    }

    #[test]
    fn acl_fulltext_and_path_are_unsupported() {
        for name in ["ecm:acl", "ecm:acl/*1/principal", "ecm:fulltext", "ecm:fulltext_title", "ecm:path"] {
            assert!(
                matches!(lookup(name), Err(CompileError::UnsupportedOperator { .. })),
                "{name}"
            );
        }

        assert!(lookup("ecm:fulltextJobId").is_ok());
    }

    #[test]
    fn unknown_system_names_are_unknown_properties() {
        assert_eq!(
            lookup("ecm:nope"),
            Err(CompileError::unknown_property("ecm:nope"))
        );
    }
}
