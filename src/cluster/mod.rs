//! Cluster Snapshot Module
//!
//! Read-only input types describing the cluster-wide metadata the catalog
//! consumes. Snapshots are produced by the cluster-state layer and handed
//! to `Schemas::refresh` as immutable values; how they are delivered
//! (polling, push, watch) is not this crate's concern.

pub mod state;
pub mod udf;

pub use self::state::{ClusterMetadata, ClusterState, IndexTemplate};
pub use self::udf::UserDefinedFunctionMetadata;
