//! Store abstraction.
//!
//! A [`ContentStore`] is the authoritative dataset shared by every request
//! scope in the process. Loaders batch-fetch against it; edits are applied
//! to it directly.

use async_trait::async_trait;
use folio_core::{Article, ArticleId, ArticlePatch, Result, User, UserId};

/// Authoritative source of articles and users.
///
/// Batch lookups return one entry per requested id, at the same position;
/// `None` marks an id the store does not know.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Backend name for diagnostics.
    fn name(&self) -> &str;

    /// Every article id, in dataset order.
    async fn article_ids(&self) -> Result<Vec<ArticleId>>;

    /// Look up articles by id.
    async fn articles(&self, ids: &[ArticleId]) -> Result<Vec<Option<Article>>>;

    /// Apply `patch` in place and stamp `editor`.
    ///
    /// Returns the updated article, or `None` if `patch.id` is unknown.
    async fn update_article(&self, patch: &ArticlePatch, editor: UserId)
    -> Result<Option<Article>>;

    /// Look up users by id.
    async fn users(&self, ids: &[UserId]) -> Result<Vec<Option<User>>>;

    /// Resolve an opaque credential to the user holding it.
    async fn user_id_for_credential(&self, credential: &str) -> Result<Option<UserId>>;
}
