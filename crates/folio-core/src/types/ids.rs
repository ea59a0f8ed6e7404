//! Identifier types for users and articles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Creates a user ID from its numeric value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Unique, stable identifier for an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(i64);

impl ArticleId {
    /// Creates an article ID from its numeric value.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_core::ArticleId;
    ///
    /// let id = ArticleId::new(3);
    /// assert_eq!(id.to_string(), "3");
    /// ```
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ArticleId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ArticleId> for i64 {
    fn from(id: ArticleId) -> Self {
        id.0
    }
}
