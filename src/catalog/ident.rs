//! Relation Identifier Module
//!
//! This module defines the immutable (schema, table) pair used as the
//! lookup key throughout the catalog.

use std::fmt;

/// Schema that unqualified storage identifiers fall into.
pub const DEFAULT_SCHEMA_NAME: &str = "doc";

/// Identifies one relation by its schema and table name.
///
/// Equality, hashing and ordering all go by the pair; identifiers are
/// immutable once constructed and are used as map keys throughout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationIdent {
    schema: String,
    table: String,
}

impl RelationIdent {
    /// Create an identifier from a schema and table name.
    ///
    /// # Panics
    ///
    /// Panics if either part is empty; an identifier without both parts is
    /// not addressable and must never enter a lookup map.
    pub fn new(schema: impl Into<String>, table: impl Into<String>) -> Self {
        let schema = schema.into();
        let table = table.into();
        assert!(!schema.is_empty(), "schema name must not be empty");
        assert!(!table.is_empty(), "table name must not be empty");
        RelationIdent { schema, table }
    }

    /// Derive an identifier from a storage object name.
    ///
    /// A qualified name like `foo.bar` addresses table `bar` in schema
    /// `foo`; an unqualified name lives in the default `doc` schema.
    pub fn from_index(storage_ident: &str) -> Self {
        match storage_ident.split_once('.') {
            Some((schema, table)) => RelationIdent::new(schema, table),
            None => RelationIdent::new(DEFAULT_SCHEMA_NAME, storage_ident),
        }
    }

    /// Get the schema name
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Get the table name
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The fully qualified name, `schema.table`
    pub fn fqn(&self) -> String {
        format!("{}.{}", self.schema, self.table)
    }
}

impl fmt::Display for RelationIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.table)
    }
}

/// Namespace portion of a storage identifier, `doc` when unqualified.
pub fn schema_of(storage_ident: &str) -> &str {
    match storage_ident.split_once('.') {
        Some((schema, _)) => schema,
        None => DEFAULT_SCHEMA_NAME,
    }
}
