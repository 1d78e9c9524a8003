//! Operation Support Module
//!
//! Enumerates the relation-affecting operations and the named operation
//! policies, and implements the support check applied on every resolution.

use std::fmt;

use crate::catalog::error::CatalogError;
use crate::catalog::relation::RelationInfo;

/// A relation-affecting operation requested by the query layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Operation {
    Select = 1 << 0,
    Insert = 1 << 1,
    Update = 1 << 2,
    Delete = 1 << 3,
    Create = 1 << 4,
    Drop = 1 << 5,
    Alter = 1 << 6,
    Refresh = 1 << 7,
    CopyTo = 1 << 8,
    CopyFrom = 1 << 9,
    ShowCreate = 1 << 10,
}

impl Operation {
    const VALUES: [Operation; 11] = [
        Operation::Select,
        Operation::Insert,
        Operation::Update,
        Operation::Delete,
        Operation::Create,
        Operation::Drop,
        Operation::Alter,
        Operation::Refresh,
        Operation::CopyTo,
        Operation::CopyFrom,
        Operation::ShowCreate,
    ];
}

impl fmt::Display for Operation {
    /// SQL-facing spelling, used verbatim in error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Select => "SELECT",
            Operation::Insert => "INSERT",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
            Operation::Create => "CREATE",
            Operation::Drop => "DROP",
            Operation::Alter => "ALTER",
            Operation::Refresh => "REFRESH",
            Operation::CopyTo => "COPY TO",
            Operation::CopyFrom => "COPY FROM",
            Operation::ShowCreate => "SHOW CREATE",
        };
        write!(f, "{}", name)
    }
}

/// An immutable set of operations.
///
/// Descriptors carry one of the named policy constants below; the reason
/// clause attached to unsupported-operation errors is derived from which
/// policy a descriptor carries, never from a separate flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSet(u16);

impl OperationSet {
    pub const EMPTY: OperationSet = OperationSet(0);

    /// Every operation; the policy of regular user tables.
    pub const ALL: OperationSet = OperationSet(
        Operation::Select as u16
            | Operation::Insert as u16
            | Operation::Update as u16
            | Operation::Delete as u16
            | Operation::Create as u16
            | Operation::Drop as u16
            | Operation::Alter as u16
            | Operation::Refresh as u16
            | Operation::CopyTo as u16
            | Operation::CopyFrom as u16
            | Operation::ShowCreate as u16,
    );

    /// The pure-read operations; also the set an alias relation may serve.
    pub const READ_ONLY: OperationSet =
        OperationSet(Operation::Select as u16 | Operation::ShowCreate as u16);

    /// Policy carried by built-in system tables. Shares its members with
    /// `READ_ONLY`, so both report the read-only reason clause.
    pub const SYS_READ_ONLY: OperationSet = Self::READ_ONLY;

    pub fn of(operations: &[Operation]) -> OperationSet {
        let mut mask = 0;
        for op in operations {
            mask |= *op as u16;
        }
        OperationSet(mask)
    }

    pub const fn contains(self, operation: Operation) -> bool {
        self.0 & operation as u16 != 0
    }

    pub const fn union(self, other: OperationSet) -> OperationSet {
        OperationSet(self.0 | other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Operation> {
        Operation::VALUES.into_iter().filter(move |op| self.contains(*op))
    }

    /// Explanatory clause for unsupported-operation errors, derived from
    /// the policy identity.
    pub fn reason(self) -> Option<&'static str> {
        if self.0 == Self::READ_ONLY.0 {
            Some("as it is read-only")
        } else {
            None
        }
    }
}

/// Check that a relation supports the requested operation.
///
/// The alias check has fixed precedence: an alias that cannot serve the
/// operation reports the generic message with no reason clause, regardless
/// of its nominal operation set.
pub fn check_operation(info: &RelationInfo, operation: Operation) -> Result<(), CatalogError> {
    if info.is_alias() && !OperationSet::READ_ONLY.contains(operation) {
        return Err(CatalogError::UnsupportedOperation {
            ident: info.ident().clone(),
            operation,
            reason: String::new(),
        });
    }
    if !info.supported_operations().contains(operation) {
        let reason = match info.supported_operations().reason() {
            Some(clause) => format!(", {}", clause),
            None => String::new(),
        };
        return Err(CatalogError::UnsupportedOperation {
            ident: info.ident().clone(),
            operation,
            reason,
        });
    }
    Ok(())
}
