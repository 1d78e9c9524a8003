#![allow(dead_code)]

use std::sync::Arc;

use anchordb::catalog::{
    RelationIdent, RelationInfo, Role, RowGranularity, SchemaInfo, Schemas, sys_schema,
};
use anchordb::cluster::{ClusterMetadata, ClusterState, UserDefinedFunctionMetadata};

// Registry with the built-in `sys` schema plus a superuser-guarded
// `sys.authorized` table
pub fn schemas_with_sys_tables() -> Schemas {
    let sys = sys_schema();
    sys.register_table(Arc::new(RelationInfo::system(
        RelationIdent::new("sys", "authorized"),
        RowGranularity::Doc,
        &[Role::Superuser],
    )));
    Schemas::new(vec![sys as Arc<dyn SchemaInfo>])
}

// Snapshot with the given open indices and nothing else
pub fn snapshot_with_indices(version: u64, indices: &[&str]) -> ClusterState {
    ClusterState::new(
        version,
        ClusterMetadata {
            open_indices: indices.iter().map(|s| s.to_string()).collect(),
            ..ClusterMetadata::default()
        },
    )
}

pub fn udf(schema: &str, name: &str) -> UserDefinedFunctionMetadata {
    UserDefinedFunctionMetadata::new(
        schema,
        name,
        Vec::new(),
        "string",
        "burlesque",
        "Hello, World!Q",
    )
}
