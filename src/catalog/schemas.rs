//! Catalog Registry Module
//!
//! The top-level aggregate: maps a (schema, table) pair to a relation
//! descriptor, validates that the requested operation is supported, checks
//! the requesting principal's authorization, and tracks the dynamic schema
//! set derived from cluster snapshots.
//!
//! Resolution is the per-query hot path and never blocks on refresh: the
//! dynamic schema map is an `Arc` replaced wholesale on every applied
//! snapshot, and a resolve call completes against whichever map value it
//! read at entry.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use log::debug;
use parking_lot::{Mutex, RwLock};

use crate::catalog::error::CatalogError;
use crate::catalog::ident::{RelationIdent, schema_of};
use crate::catalog::operation::{Operation, check_operation};
use crate::catalog::provider::{DocSchemaInfo, SchemaInfo};
use crate::catalog::relation::RelationInfo;
use crate::catalog::user::{ABSENT_USER, User};
use crate::cluster::{ClusterMetadata, ClusterState};

type SchemaMap = HashMap<String, Arc<dyn SchemaInfo>>;

/// Process-wide catalog registry.
///
/// The built-in map is fixed at construction; the dynamic map is replaced
/// atomically whenever a new cluster snapshot is applied. Built-in schemas
/// take precedence on name collision.
pub struct Schemas {
    built_in: SchemaMap,
    dynamic: RwLock<Arc<SchemaMap>>,
    // serializes refreshes and remembers the last applied snapshot version
    last_applied: Mutex<Option<u64>>,
}

impl Schemas {
    pub fn new(built_in: Vec<Arc<dyn SchemaInfo>>) -> Self {
        let built_in = built_in
            .into_iter()
            .map(|schema| (schema.name().to_string(), schema))
            .collect();
        Schemas {
            built_in,
            dynamic: RwLock::new(Arc::new(HashMap::new())),
            last_applied: Mutex::new(None),
        }
    }

    /// Resolve a relation for a specific operation: name lookup, then the
    /// operation-support check, then authorization. No side effects.
    pub fn resolve(
        &self,
        ident: &RelationIdent,
        operation: Operation,
        user: Option<&User>,
    ) -> Result<Arc<RelationInfo>, CatalogError> {
        let info = self.lookup(ident)?;
        check_operation(&info, operation)?;
        check_access(&info, user)?;
        Ok(info)
    }

    /// Resolve a relation without an operation-support check: identity and
    /// authorization only. Used by callers that bind names before the
    /// concrete operation is known.
    pub fn resolve_for_access(
        &self,
        ident: &RelationIdent,
        user: Option<&User>,
    ) -> Result<Arc<RelationInfo>, CatalogError> {
        let info = self.lookup(ident)?;
        check_access(&info, user)?;
        Ok(info)
    }

    fn lookup(&self, ident: &RelationIdent) -> Result<Arc<RelationInfo>, CatalogError> {
        let schema = match self.built_in.get(ident.schema()) {
            Some(schema) => Arc::clone(schema),
            None => {
                // one read of the dynamic map per call; the rest of the
                // resolution is isolated from concurrent refreshes
                let dynamic: Arc<SchemaMap> = self.dynamic.read().clone();
                match dynamic.get(ident.schema()) {
                    Some(schema) => Arc::clone(schema),
                    None => return Err(CatalogError::SchemaUnknown(ident.schema().to_string())),
                }
            }
        };
        schema
            .table(ident.table())
            .ok_or_else(|| CatalogError::TableUnknown(ident.clone()))
    }

    /// Apply a new cluster snapshot: discover the dynamic schema names,
    /// build one provider per name, and swap the dynamic map atomically.
    ///
    /// Snapshots at or below the last applied version are skipped, which
    /// coalesces refreshes racing each other. A snapshot that fails
    /// validation leaves the previous dynamic map in place.
    pub fn refresh(&self, state: &ClusterState) -> Result<(), CatalogError> {
        let mut last_applied = self.last_applied.lock();
        if let Some(version) = *last_applied {
            if state.version <= version {
                debug!(
                    "skipping cluster snapshot at version {} (already applied {})",
                    state.version, version
                );
                return Ok(());
            }
        }
        validate_metadata(&state.metadata)?;

        let mut dynamic: SchemaMap = HashMap::new();
        for name in current_schemas(&state.metadata) {
            // built-in schemas are never dynamic
            if self.built_in.contains_key(&name) {
                continue;
            }
            let schema = DocSchemaInfo::from_metadata(&name, &state.metadata);
            dynamic.insert(name, Arc::new(schema) as Arc<dyn SchemaInfo>);
        }
        debug!(
            "applied cluster snapshot at version {}: {} dynamic schemas",
            state.version,
            dynamic.len()
        );
        *self.dynamic.write() = Arc::new(dynamic);
        *last_applied = Some(state.version);
        Ok(())
    }

    /// Sorted names of all currently known schemas, built-in and dynamic.
    pub fn schema_names(&self) -> Vec<String> {
        let dynamic: Arc<SchemaMap> = self.dynamic.read().clone();
        let names: BTreeSet<&String> = self.built_in.keys().chain(dynamic.keys()).collect();
        names.into_iter().cloned().collect()
    }

    /// Look up a schema provider by name, built-in taking precedence.
    pub fn schema(&self, name: &str) -> Option<Arc<dyn SchemaInfo>> {
        if let Some(schema) = self.built_in.get(name) {
            return Some(Arc::clone(schema));
        }
        self.dynamic.read().get(name).cloned()
    }
}

/// Authorization check: a relation with required roles is visible only to
/// a principal holding at least one of them. The failure message names the
/// principal and the fully qualified relation; it is displayed to end
/// users verbatim.
fn check_access(info: &RelationInfo, user: Option<&User>) -> Result<(), CatalogError> {
    let required = info.required_roles();
    if required.is_empty() {
        return Ok(());
    }
    match user {
        Some(user) if user.has_any_role(required) => Ok(()),
        _ => Err(CatalogError::Unauthorized {
            user: user
                .map(|u| u.name().to_string())
                .unwrap_or_else(|| ABSENT_USER.to_string()),
            ident: info.ident().clone(),
        }),
    }
}

fn validate_metadata(metadata: &ClusterMetadata) -> Result<(), CatalogError> {
    for index in &metadata.open_indices {
        if index.is_empty() || schema_of(index).is_empty() || index.ends_with('.') {
            return Err(CatalogError::InvalidClusterState(format!(
                "malformed storage identifier '{}' in open index list",
                index
            )));
        }
    }
    for template in &metadata.templates {
        if template.name.is_empty() || schema_of(&template.name).is_empty() {
            return Err(CatalogError::InvalidClusterState(format!(
                "malformed template name '{}'",
                template.name
            )));
        }
    }
    for udf in &metadata.udfs {
        if udf.schema.is_empty() {
            return Err(CatalogError::InvalidClusterState(format!(
                "user defined function '{}' declares no schema",
                udf.name
            )));
        }
    }
    Ok(())
}

/// Derive the dynamic schema names implied by a cluster snapshot: one per
/// namespace of an open index, one per namespace of an index template
/// (partitioned tables exist as templates even with zero open partitions),
/// and one per schema declared by a user-defined-function registration.
///
/// Pure with respect to the metadata: identical snapshots always discover
/// identical sets.
pub fn current_schemas(metadata: &ClusterMetadata) -> BTreeSet<String> {
    let mut schemas = BTreeSet::new();
    for index in &metadata.open_indices {
        schemas.insert(schema_of(index).to_string());
    }
    for template in &metadata.templates {
        schemas.insert(schema_of(&template.name).to_string());
    }
    for udf in &metadata.udfs {
        schemas.insert(udf.schema.clone());
    }
    schemas
}

/// The subset of `current_schemas` not already known. An optimization hook
/// for incremental callers; a full rebuild is always a correct substitute.
pub fn new_schemas(old_known: &HashSet<String>, metadata: &ClusterMetadata) -> BTreeSet<String> {
    current_schemas(metadata)
        .into_iter()
        .filter(|schema| !old_known.contains(schema))
        .collect()
}
