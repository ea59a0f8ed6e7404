//! Store-backed batch functions.

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::{Article, ArticleId, Result, User, UserId};
use folio_loader::BatchFn;
use folio_storage::ContentStore;

/// Fetches articles by id from a [`ContentStore`].
pub struct ArticleFetcher {
    store: Arc<dyn ContentStore>,
}

impl ArticleFetcher {
    /// Fetch from `store`.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BatchFn<ArticleId, Article> for ArticleFetcher {
    async fn fetch(&self, keys: &[ArticleId]) -> Result<Vec<Option<Article>>> {
        self.store.articles(keys).await
    }
}

/// Fetches users by id from a [`ContentStore`].
pub struct UserFetcher {
    store: Arc<dyn ContentStore>,
}

impl UserFetcher {
    /// Fetch from `store`.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BatchFn<UserId, User> for UserFetcher {
    async fn fetch(&self, keys: &[UserId]) -> Result<Vec<Option<User>>> {
        self.store.users(keys).await
    }
}
