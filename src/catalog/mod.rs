//! Catalog Management Module
//!
//! This module maps (schema, table) names to relation descriptors, checks
//! that a requested operation is supported by the relation, and checks the
//! requesting principal's authorization. Built-in schemas are fixed at
//! startup; dynamic schemas are derived from the cluster snapshot on every
//! refresh.

pub mod error;
pub mod ident;
pub mod operation;
pub mod provider;
pub mod relation;
pub mod schemas;
pub mod sys;
pub mod user;

// Re-export key types
pub use self::error::CatalogError;
pub use self::ident::{DEFAULT_SCHEMA_NAME, RelationIdent, schema_of};
pub use self::operation::{Operation, OperationSet, check_operation};
pub use self::provider::{DocSchemaInfo, SchemaInfo, StaticSchemaInfo, SystemSchemaInfo};
pub use self::relation::{RelationInfo, Routing, RowGranularity};
pub use self::schemas::{Schemas, current_schemas, new_schemas};
pub use self::sys::{SYS_SCHEMA_NAME, sys_schema};
pub use self::user::{ABSENT_USER, Role, User};
