// Catalog Resolution Integration Tests
//
// This module tests name resolution, the operation-support check, and the
// authorization check through the registry's public entry points.

use std::sync::Arc;

use anchordb::catalog::{
    CatalogError, Operation, OperationSet, RelationIdent, RelationInfo, Routing, RowGranularity,
    SchemaInfo, Schemas, StaticSchemaInfo, User,
};

// Declare the common module for test utilities using a path attribute
#[path = "../common/mod.rs"]
mod common;
use common::schemas_with_sys_tables;

fn schemas_with(info: RelationInfo) -> Schemas {
    let schema = StaticSchemaInfo::new(info.ident().schema().to_string(), vec![Arc::new(info)]);
    Schemas::new(vec![Arc::new(schema) as Arc<dyn SchemaInfo>])
}

#[test]
fn test_system_schema_is_not_writable() {
    let ident = RelationIdent::new("foo", "bar");
    let schemas = schemas_with(RelationInfo::new(
        ident.clone(),
        OperationSet::SYS_READ_ONLY,
        &[],
        false,
        RowGranularity::Doc,
        Routing::new("foo.bar"),
    ));

    let err = schemas.resolve(&ident, Operation::Insert, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The relation \"foo.bar\" doesn't support or allow INSERT operations, as it is read-only."
    );
}

#[test]
fn test_table_alias_is_not_writable() {
    // the alias nominally supports INSERT; the alias flag still blocks it,
    // with the generic message
    let ident = RelationIdent::new("foo", "bar");
    let schemas = schemas_with(RelationInfo::alias(ident.clone()));

    let err = schemas.resolve(&ident, Operation::Insert, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The relation \"foo.bar\" doesn't support or allow INSERT operations."
    );
}

#[test]
fn test_read_only_relation_is_still_readable() {
    let ident = RelationIdent::new("foo", "bar");
    let schemas = schemas_with(RelationInfo::new(
        ident.clone(),
        OperationSet::READ_ONLY,
        &[],
        false,
        RowGranularity::Doc,
        Routing::new("foo.bar"),
    ));

    let info = schemas
        .resolve(&ident, Operation::Select, Some(&User::new("arthur", &[])))
        .unwrap();
    assert_eq!(info.ident(), &ident);
}

#[test]
fn test_authorization_required_missing_roles() {
    let schemas = schemas_with_sys_tables();
    let arthur = User::new("arthur", &[]);

    let err = schemas
        .resolve_for_access(&RelationIdent::new("sys", "authorized"), Some(&arthur))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "User \"arthur\" is not authorized to access table \"sys.authorized\""
    );
}

#[test]
fn test_authorization_required_absent_user() {
    let schemas = schemas_with_sys_tables();

    let err = schemas
        .resolve_for_access(&RelationIdent::new("sys", "authorized"), None)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "User \"null\" is not authorized to access table \"sys.authorized\""
    );
}

#[test]
fn test_authorization_required_authorized_user() {
    let schemas = schemas_with_sys_tables();
    let superuser = User::superuser("superuser");

    let info = schemas
        .resolve_for_access(&RelationIdent::new("sys", "authorized"), Some(&superuser))
        .unwrap();
    assert_eq!(info.ident().fqn(), "sys.authorized");
}

#[test]
fn test_no_authorization_required_normal_user() {
    let schemas = schemas_with_sys_tables();
    let arthur = User::new("arthur", &[]);

    assert!(
        schemas
            .resolve_for_access(&RelationIdent::new("sys", "checks"), Some(&arthur))
            .is_ok()
    );
}

#[test]
fn test_no_authorization_required_absent_user() {
    let schemas = schemas_with_sys_tables();

    assert!(
        schemas
            .resolve_for_access(&RelationIdent::new("sys", "checks"), None)
            .is_ok()
    );
}

#[test]
fn test_unknown_schema() {
    let schemas = schemas_with_sys_tables();

    let err = schemas
        .resolve(&RelationIdent::new("nope", "t"), Operation::Select, None)
        .unwrap_err();
    assert!(matches!(err, CatalogError::SchemaUnknown(ref s) if s == "nope"));
}

#[test]
fn test_unknown_table_never_reports_unauthorized() {
    // a miss inside a schema holding guarded tables is a plain
    // table-unknown failure, even for a role-less principal
    let schemas = schemas_with_sys_tables();
    let arthur = User::new("arthur", &[]);

    let err = schemas
        .resolve(
            &RelationIdent::new("sys", "missing"),
            Operation::Select,
            Some(&arthur),
        )
        .unwrap_err();
    assert!(matches!(err, CatalogError::TableUnknown(_)));
    assert_eq!(err.to_string(), "Table 'sys.missing' unknown");
}

#[test]
fn test_support_check_runs_before_authorization() {
    let ident = RelationIdent::new("sys", "authorized");
    let schemas = schemas_with_sys_tables();
    let arthur = User::new("arthur", &[]);

    // sys.authorized is both read-only and superuser-guarded; INSERT by a
    // role-less user reports the unsupported operation, not authorization
    let err = schemas
        .resolve(&ident, Operation::Insert, Some(&arthur))
        .unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedOperation { .. }));
}

#[test]
fn test_resolve_for_access_skips_support_check() {
    // name binding may touch a read-only relation before the operation is
    // known; only identity and authorization apply
    let ident = RelationIdent::new("foo", "bar");
    let schemas = schemas_with(RelationInfo::new(
        ident.clone(),
        OperationSet::READ_ONLY,
        &[],
        false,
        RowGranularity::Doc,
        Routing::new("foo.bar"),
    ));

    assert!(schemas.resolve_for_access(&ident, None).is_ok());
}

#[test]
fn test_resolved_descriptor_carries_routing() {
    let schemas = schemas_with_sys_tables();
    let info = schemas
        .resolve(&RelationIdent::new("sys", "checks"), Operation::Select, None)
        .unwrap();
    assert_eq!(info.routing().target(), "sys.checks");
    assert_eq!(info.row_granularity(), RowGranularity::Doc);
}
