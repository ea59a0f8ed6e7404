//! Permission evaluation.
//!
//! Precedence for `has_permission`, first match wins:
//!
//! 1. no policy on the item: allow
//! 2. the wildcard entry grants the operation: allow
//! 3. any role the caller holds has an entry granting it: allow
//! 4. otherwise: deny
//!
//! Grants are additive; there is no deny entry that overrides an allow.

use folio_core::{Caller, Error, Operation, Result, User};

use crate::traits::{Principal, Protected};

/// Stateless access-control evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct AclEngine;

impl AclEngine {
    /// Create an engine.
    pub fn new() -> Self {
        Self
    }

    /// May `caller` perform `operation` on `item`?
    pub fn has_permission<I, P>(&self, item: &I, caller: &P, operation: Operation) -> bool
    where
        I: Protected + ?Sized,
        P: Principal + ?Sized,
    {
        let Some(policy) = item.access_policy() else {
            return true;
        };

        if policy.everyone().allows(operation) {
            return true;
        }

        let granted = caller
            .roles()
            .iter()
            .any(|role| policy.role(role).is_some_and(|perms| perms.allows(operation)));

        if !granted {
            log::debug!(
                "Denied {operation} on {} to a caller with {} role(s)",
                item.describe(),
                caller.roles().len()
            );
        }
        granted
    }

    /// Does `caller` hold at least one of `required`?
    pub fn has_role<P, S>(&self, caller: &P, required: &[S]) -> bool
    where
        P: Principal + ?Sized,
        S: AsRef<str>,
    {
        let roles = caller.roles();
        required.iter().any(|role| roles.contains(role.as_ref()))
    }

    /// Gate for operations restricted to certain roles.
    ///
    /// Returns the resolved user, `Unauthorized` for an anonymous caller, or
    /// `Forbidden` when the user holds none of `required`.
    pub fn require_role<'c, S>(&self, caller: &'c Caller, required: &[S]) -> Result<&'c User>
    where
        S: AsRef<str>,
    {
        let user = caller.require_user()?;
        if self.has_role(user, required) {
            Ok(user)
        } else {
            log::info!(
                "User '{}' lacks a required role for this operation",
                user.username
            );
            Err(Error::forbidden(required.iter().map(|r| r.as_ref())))
        }
    }

    /// Lazily keep only the items `caller` may read, in their original order.
    pub fn filter_readable<'a, T, I, P>(
        self,
        items: I,
        caller: &'a P,
    ) -> impl Iterator<Item = T> + 'a
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
        T: Protected + 'a,
        P: Principal + ?Sized,
    {
        items
            .into_iter()
            .filter(move |item| self.has_permission(item, caller, Operation::Read))
    }
}

// ============================================================================
// Tests
// ============================================================================
