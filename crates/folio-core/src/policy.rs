//! Access policies attached to content items.
//!
//! An [`AccessPolicy`] maps each [`Subject`] to its [`Permissions`]. It
//! always carries exactly one [`Subject::Everyone`] entry; role entries are
//! optional and only ever add grants.
//!
//! # Example
//!
//! ```rust
//! use folio_core::policy::{AccessPolicy, Operation, Permissions, Subject};
//!
//! let policy = AccessPolicy::new(Permissions::NONE)
//!     .with_role("admin", Permissions::READ_WRITE);
//!
//! assert!(!policy.everyone().allows(Operation::Read));
//! assert!(policy.get(&Subject::role("admin")).allows(Operation::Write));
//! assert_eq!(policy.get(&Subject::role("editor")), Permissions::NONE);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Operation
// ============================================================================

/// An operation a caller wants to perform on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Read the item.
    Read,
    /// Modify the item.
    Write,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

// ============================================================================
// Permissions
// ============================================================================

/// The permission set granted to one subject.
///
/// Exactly two flags; an absent entry is the same as [`Permissions::NONE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permissions {
    /// May read the item.
    #[serde(default)]
    pub read: bool,
    /// May modify the item.
    #[serde(default)]
    pub write: bool,
}

impl Permissions {
    /// Grants nothing.
    pub const NONE: Self = Self {
        read: false,
        write: false,
    };

    /// Grants read only.
    pub const READ_ONLY: Self = Self {
        read: true,
        write: false,
    };

    /// Grants read and write.
    pub const READ_WRITE: Self = Self {
        read: true,
        write: true,
    };

    /// Returns `true` if this set grants `operation`.
    pub fn allows(&self, operation: Operation) -> bool {
        match operation {
            Operation::Read => self.read,
            Operation::Write => self.write,
        }
    }
}

// ============================================================================
// Subject
// ============================================================================

/// Who a policy entry applies to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subject {
    /// Every caller, signed in or not.
    Everyone,
    /// Callers holding the named role.
    Role(String),
}

impl Subject {
    /// Convenience constructor for a role subject.
    pub fn role(name: impl Into<String>) -> Self {
        Self::Role(name.into())
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Everyone => write!(f, "*"),
            Self::Role(name) => write!(f, "role:{name}"),
        }
    }
}

// ============================================================================
// AccessPolicy
// ============================================================================

/// Mapping from subject to permission set for one item.
///
/// The wildcard entry is a field of its own, so a policy without one is
/// unrepresentable; role entries are keyed by name. Serialized as
/// `{ everyone = {...}, roles = { name = {...} } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    #[serde(default)]
    everyone: Permissions,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    roles: BTreeMap<String, Permissions>,
}

impl AccessPolicy {
    /// Creates a policy whose wildcard entry grants `everyone`.
    pub fn new(everyone: Permissions) -> Self {
        Self {
            everyone,
            roles: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the entry for `role`.
    pub fn with_role(mut self, role: impl Into<String>, permissions: Permissions) -> Self {
        self.roles.insert(role.into(), permissions);
        self
    }

    /// Permissions granted to every caller.
    pub fn everyone(&self) -> Permissions {
        self.everyone
    }

    /// Permissions for `subject`; a missing entry grants nothing.
    pub fn get(&self, subject: &Subject) -> Permissions {
        match subject {
            Subject::Everyone => self.everyone,
            Subject::Role(name) => self.role(name).unwrap_or(Permissions::NONE),
        }
    }

    /// Permissions explicitly attached to `role`, if any.
    pub fn role(&self, role: &str) -> Option<Permissions> {
        self.roles.get(role).copied()
    }

    /// Iterates entries in subject order (wildcard first, then roles by name).
    pub fn rules(&self) -> impl Iterator<Item = (Subject, Permissions)> + '_ {
        std::iter::once((Subject::Everyone, self.everyone)).chain(
            self.roles
                .iter()
                .map(|(name, perms)| (Subject::Role(name.clone()), *perms)),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
