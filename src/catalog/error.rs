//! Catalog Error Module
//!
//! The error taxonomy surfaced to the query layer. All variants are
//! terminal, synchronous failures; none are transient, so the catalog
//! never retries internally. The unsupported-operation and unauthorized
//! messages are user-facing and part of the contract.

use thiserror::Error;

use crate::catalog::ident::RelationIdent;
use crate::catalog::operation::Operation;

/// Resolution error returned by the catalog registry
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Requested schema name is neither built-in nor dynamic
    #[error("Schema '{0}' unknown")]
    SchemaUnknown(String),
    /// Schema found, table name not present within it
    #[error("Table '{0}' unknown")]
    TableUnknown(RelationIdent),
    /// Relation exists but the operation is structurally disallowed.
    /// `reason` is either empty or a leading-comma clause derived from the
    /// relation's operation policy.
    #[error("The relation \"{ident}\" doesn't support or allow {operation} operations{reason}.")]
    UnsupportedOperation {
        ident: RelationIdent,
        operation: Operation,
        reason: String,
    },
    /// Principal lacks every role required by the relation
    #[error("User \"{user}\" is not authorized to access table \"{ident}\"")]
    Unauthorized { user: String, ident: RelationIdent },
    /// A cluster snapshot handed to refresh failed validation; the
    /// previous dynamic state stays in place
    #[error("Invalid cluster state: {0}")]
    InvalidClusterState(String),
}
