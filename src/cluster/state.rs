//! Cluster State Types
//!
//! The versioned snapshot shape. Storage identifiers follow the
//! `schema.table` convention; unqualified names belong to the default
//! `doc` schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::udf::UserDefinedFunctionMetadata;

/// Immutable point-in-time view of cluster-wide metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterState {
    /// Monotonically increasing snapshot version.
    pub version: u64,
    pub metadata: ClusterMetadata,
}

impl ClusterState {
    pub fn new(version: u64, metadata: ClusterMetadata) -> Self {
        ClusterState { version, metadata }
    }
}

/// The metadata portion of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterMetadata {
    /// Storage identifiers of all open indices.
    #[serde(default)]
    pub open_indices: Vec<String>,
    /// Alias identifier to the storage identifiers it fronts.
    #[serde(default)]
    pub aliases: BTreeMap<String, Vec<String>>,
    /// Index templates; a partitioned table is backed by one even while it
    /// has no open partition.
    #[serde(default)]
    pub templates: Vec<IndexTemplate>,
    /// User-defined-function registrations.
    #[serde(default)]
    pub udfs: Vec<UserDefinedFunctionMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexTemplate {
    /// Storage identifier the template is named after.
    pub name: String,
    /// Index name pattern the template applies to.
    pub pattern: String,
}

impl IndexTemplate {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        IndexTemplate {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}
