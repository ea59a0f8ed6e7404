//! Seams between the engine and the things it judges.

use std::collections::BTreeSet;

use folio_core::{AccessPolicy, Article, Caller, User};

/// An item that may carry an access policy.
pub trait Protected {
    /// The item's policy; `None` means unrestricted.
    fn access_policy(&self) -> Option<&AccessPolicy>;

    /// Short label used in log lines.
    fn describe(&self) -> String;
}

/// Someone whose roles decide what they may do.
pub trait Principal {
    /// Roles held; empty for anonymous callers.
    fn roles(&self) -> &BTreeSet<String>;
}

impl Protected for Article {
    fn access_policy(&self) -> Option<&AccessPolicy> {
        self.access_policy.as_ref()
    }

    fn describe(&self) -> String {
        format!("article {}", self.id)
    }
}

impl<T: Protected + ?Sized> Protected for &T {
    fn access_policy(&self) -> Option<&AccessPolicy> {
        (**self).access_policy()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl Principal for User {
    fn roles(&self) -> &BTreeSet<String> {
        &self.roles
    }
}

impl Principal for Caller {
    fn roles(&self) -> &BTreeSet<String> {
        Caller::roles(self)
    }
}
