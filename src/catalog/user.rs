//! Principal Module
//!
//! Authenticated identities and the roles granted to them. A request with
//! no authenticated identity is represented as an absent principal
//! (`Option::None`) at the API boundary.

use std::collections::HashSet;

/// Token printed in authorization errors when no principal is attached to
/// the request.
pub const ABSENT_USER: &str = "null";

/// A named capability grant checked against a relation's required-role set.
///
/// Authorization is set-intersection over roles, so new roles can be added
/// without touching existing checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Superuser,
}

/// An authenticated principal and its granted roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    roles: HashSet<Role>,
}

impl User {
    pub fn new(name: impl Into<String>, roles: &[Role]) -> Self {
        User {
            name: name.into(),
            roles: roles.iter().copied().collect(),
        }
    }

    /// A principal holding the superuser role.
    pub fn superuser(name: impl Into<String>) -> Self {
        User::new(name, &[Role::Superuser])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roles(&self) -> &HashSet<Role> {
        &self.roles
    }

    /// Whether this principal holds at least one of the required roles.
    pub fn has_any_role(&self, required: &HashSet<Role>) -> bool {
        required.iter().any(|role| self.roles.contains(role))
    }
}
