//! Users and the request-scoped caller identity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ids::UserId;
use crate::error::{Error, Result};

/// Role set of an anonymous caller.
static NO_ROLES: BTreeSet<String> = BTreeSet::new();

/// A known user of the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub username: String,
    /// Opaque credential presented by this user.
    pub credential: String,
    /// Roles held by this user.
    #[serde(default)]
    pub roles: BTreeSet<String>,
}

impl User {
    /// Creates a user with the given roles.
    pub fn new<I, S>(
        id: impl Into<UserId>,
        username: impl Into<String>,
        credential: impl Into<String>,
        roles: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            username: username.into(),
            credential: credential.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if the user holds `role`.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

/// Identity of whoever issued the current request.
///
/// Resolved once per request. An anonymous caller has an empty role set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    user: Option<User>,
}

impl Caller {
    /// A caller with no resolved identity.
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// A caller resolved to `user`.
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// The resolved user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns `true` if no identity was resolved.
    pub fn is_anonymous(&self) -> bool {
        self.user.is_none()
    }

    /// The caller's roles; empty for anonymous callers.
    pub fn roles(&self) -> &BTreeSet<String> {
        self.user.as_ref().map(|u| &u.roles).unwrap_or(&NO_ROLES)
    }

    /// The resolved user, or [`Error::Unauthorized`].
    pub fn require_user(&self) -> Result<&User> {
        self.user.as_ref().ok_or(Error::Unauthorized)
    }
}

impl From<Option<User>> for Caller {
    fn from(user: Option<User>) -> Self {
        Self { user }
    }
}
