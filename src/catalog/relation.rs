//! Relation Descriptor Module
//!
//! This module defines the capability object describing one resolvable
//! relation. Descriptors are immutable after construction and shared with
//! every caller that resolved them, so concurrent readers never race.

use std::collections::HashSet;

use crate::catalog::ident::RelationIdent;
use crate::catalog::operation::OperationSet;
use crate::catalog::user::Role;

/// Granularity at which rows of a relation are produced and routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowGranularity {
    Doc,
    Shard,
    Node,
    Cluster,
}

/// Opaque routing descriptor naming the storage target of a relation.
///
/// The catalog carries this for the execution layer; it never computes
/// with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routing(String);

impl Routing {
    pub fn new(target: impl Into<String>) -> Self {
        Routing(target.into())
    }

    pub fn target(&self) -> &str {
        &self.0
    }
}

/// Describes one resolvable relation: identity, supported operations,
/// required roles, alias flag, and routing.
#[derive(Debug, Clone)]
pub struct RelationInfo {
    ident: RelationIdent,
    supported_operations: OperationSet,
    required_roles: HashSet<Role>,
    is_alias: bool,
    row_granularity: RowGranularity,
    routing: Routing,
}

impl RelationInfo {
    pub fn new(
        ident: RelationIdent,
        supported_operations: OperationSet,
        required_roles: &[Role],
        is_alias: bool,
        row_granularity: RowGranularity,
        routing: Routing,
    ) -> Self {
        RelationInfo {
            ident,
            supported_operations,
            required_roles: required_roles.iter().copied().collect(),
            is_alias,
            row_granularity,
            routing,
        }
    }

    /// Descriptor for a built-in system table. System tables are read-only
    /// and may require roles to be visible at all.
    pub fn system(
        ident: RelationIdent,
        row_granularity: RowGranularity,
        required_roles: &[Role],
    ) -> Self {
        let routing = Routing::new(ident.fqn());
        RelationInfo::new(
            ident,
            OperationSet::SYS_READ_ONLY,
            required_roles,
            false,
            row_granularity,
            routing,
        )
    }

    /// Descriptor for a user table backed by an open index.
    pub fn table(ident: RelationIdent) -> Self {
        let routing = Routing::new(ident.fqn());
        RelationInfo::new(ident, OperationSet::ALL, &[], false, RowGranularity::Doc, routing)
    }

    /// Descriptor for an alias over one or more indices. The alias flag
    /// restricts it to read operations no matter what the nominal
    /// operation set allows.
    pub fn alias(ident: RelationIdent) -> Self {
        let routing = Routing::new(ident.fqn());
        RelationInfo::new(ident, OperationSet::ALL, &[], true, RowGranularity::Doc, routing)
    }

    pub fn ident(&self) -> &RelationIdent {
        &self.ident
    }

    pub fn supported_operations(&self) -> OperationSet {
        self.supported_operations
    }

    /// Roles required to access this relation; empty means unrestricted.
    pub fn required_roles(&self) -> &HashSet<Role> {
        &self.required_roles
    }

    pub fn is_alias(&self) -> bool {
        self.is_alias
    }

    pub fn row_granularity(&self) -> RowGranularity {
        self.row_granularity
    }

    pub fn routing(&self) -> &Routing {
        &self.routing
    }
}
