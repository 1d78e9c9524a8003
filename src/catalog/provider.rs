//! Schema Provider Module
//!
//! A schema provider is a named source of relation descriptors. Three
//! variants share the single lookup capability: a static built-in map, a
//! registered-system schema, and a dynamic schema computed from the
//! cluster snapshot. The registry never branches on which variant it
//! holds.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalog::ident::{RelationIdent, schema_of};
use crate::catalog::relation::RelationInfo;
use crate::cluster::ClusterMetadata;

/// A named source of relation descriptors.
pub trait SchemaInfo: Send + Sync {
    fn name(&self) -> &str;

    /// Look up a relation by table name.
    fn table(&self, table_name: &str) -> Option<Arc<RelationInfo>>;

    /// Names of the relations currently visible in this schema, sorted.
    fn table_names(&self) -> Vec<String>;
}

fn sorted_names(tables: &HashMap<String, Arc<RelationInfo>>) -> Vec<String> {
    let mut names: Vec<String> = tables.keys().cloned().collect();
    names.sort();
    names
}

/// Built-in schema with a map of descriptors frozen at construction.
pub struct StaticSchemaInfo {
    name: String,
    tables: HashMap<String, Arc<RelationInfo>>,
}

impl StaticSchemaInfo {
    pub fn new(name: impl Into<String>, tables: Vec<Arc<RelationInfo>>) -> Self {
        let tables = tables
            .into_iter()
            .map(|info| (info.ident().table().to_string(), info))
            .collect();
        StaticSchemaInfo {
            name: name.into(),
            tables,
        }
    }
}

impl SchemaInfo for StaticSchemaInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn table(&self, table_name: &str) -> Option<Arc<RelationInfo>> {
        self.tables.get(table_name).cloned()
    }

    fn table_names(&self) -> Vec<String> {
        sorted_names(&self.tables)
    }
}

/// Built-in system schema whose tables are registered during startup
/// wiring. The write path is only used before the provider is handed to
/// the registry; afterwards it is read-only like every other provider.
pub struct SystemSchemaInfo {
    name: String,
    tables: RwLock<HashMap<String, Arc<RelationInfo>>>,
}

impl SystemSchemaInfo {
    pub fn new(name: impl Into<String>) -> Self {
        SystemSchemaInfo {
            name: name.into(),
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Register a system table. The descriptor carries its own operation
    /// policy and required roles.
    pub fn register_table(&self, info: Arc<RelationInfo>) {
        self.tables
            .write()
            .insert(info.ident().table().to_string(), info);
    }
}

impl SchemaInfo for SystemSchemaInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn table(&self, table_name: &str) -> Option<Arc<RelationInfo>> {
        self.tables.read().get(table_name).cloned()
    }

    fn table_names(&self) -> Vec<String> {
        sorted_names(&self.tables.read())
    }
}

/// Dynamic schema computed from the cluster snapshot: one descriptor per
/// open index in its namespace plus one alias descriptor per alias in its
/// namespace. Rebuilt wholesale on every refresh; building is pure with
/// respect to the snapshot.
pub struct DocSchemaInfo {
    name: String,
    tables: HashMap<String, Arc<RelationInfo>>,
}

impl DocSchemaInfo {
    pub fn from_metadata(name: &str, metadata: &ClusterMetadata) -> Self {
        let mut tables = HashMap::new();
        for index in &metadata.open_indices {
            if schema_of(index) == name {
                let ident = RelationIdent::from_index(index);
                let table = ident.table().to_string();
                tables.insert(table, Arc::new(RelationInfo::table(ident)));
            }
        }
        for alias in metadata.aliases.keys() {
            if schema_of(alias) == name {
                let ident = RelationIdent::from_index(alias);
                let table = ident.table().to_string();
                tables.insert(table, Arc::new(RelationInfo::alias(ident)));
            }
        }
        DocSchemaInfo {
            name: name.to_string(),
            tables,
        }
    }
}

impl SchemaInfo for DocSchemaInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn table(&self, table_name: &str) -> Option<Arc<RelationInfo>> {
        self.tables.get(table_name).cloned()
    }

    fn table_names(&self) -> Vec<String> {
        sorted_names(&self.tables)
    }
}
