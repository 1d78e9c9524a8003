// Anchor Database Engine — cluster metadata catalog

pub mod catalog;
pub mod cluster;

// Re-export key items for convenient access
pub use catalog::CatalogError;
pub use catalog::Operation;
pub use catalog::OperationSet;
pub use catalog::RelationIdent;
pub use catalog::RelationInfo;
pub use catalog::Schemas;
pub use catalog::{Role, User};
pub use cluster::{ClusterMetadata, ClusterState};
