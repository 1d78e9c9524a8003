//! Built-in System Schema
//!
//! Fixed registration of the read-only `sys` tables, done once at process
//! startup. Callers may register additional system tables (e.g.
//! role-guarded ones) before handing the provider to the registry.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::catalog::ident::RelationIdent;
use crate::catalog::provider::SystemSchemaInfo;
use crate::catalog::relation::{RelationInfo, RowGranularity};

pub const SYS_SCHEMA_NAME: &str = "sys";

static SYS_TABLES: Lazy<Vec<(&'static str, RowGranularity)>> = Lazy::new(|| {
    vec![
        ("cluster", RowGranularity::Cluster),
        ("nodes", RowGranularity::Node),
        ("shards", RowGranularity::Shard),
        ("jobs", RowGranularity::Doc),
        ("operations", RowGranularity::Doc),
        ("checks", RowGranularity::Doc),
        ("health", RowGranularity::Doc),
    ]
});

/// Build the `sys` provider with the fixed system tables. All of them are
/// read-only and visible to any principal.
pub fn sys_schema() -> Arc<SystemSchemaInfo> {
    let schema = SystemSchemaInfo::new(SYS_SCHEMA_NAME);
    for (table, granularity) in SYS_TABLES.iter() {
        schema.register_table(Arc::new(RelationInfo::system(
            RelationIdent::new(SYS_SCHEMA_NAME, *table),
            *granularity,
            &[],
        )));
    }
    Arc::new(schema)
}
