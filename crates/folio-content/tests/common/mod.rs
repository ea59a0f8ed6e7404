//! Common test utilities for folio-content integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use folio_core::{
    AccessPolicy, Article, ArticleId, ArticlePatch, Permissions, Result, User, UserId,
};
use folio_storage::{ContentStore, MemoryStore};

/// Wraps a [`MemoryStore`] and records every batch it is asked for.
pub struct CountingStore {
    inner: MemoryStore,
    article_batches: Mutex<Vec<Vec<ArticleId>>>,
    user_batches: Mutex<Vec<Vec<UserId>>>,
}

impl CountingStore {
    /// Wrap `inner`.
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            article_batches: Mutex::new(Vec::new()),
            user_batches: Mutex::new(Vec::new()),
        }
    }

    /// Article batches fetched so far.
    pub fn article_batches(&self) -> Vec<Vec<ArticleId>> {
        self.article_batches.lock().unwrap().clone()
    }

    /// User batches fetched so far.
    pub fn user_batches(&self) -> Vec<Vec<UserId>> {
        self.user_batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentStore for CountingStore {
    fn name(&self) -> &str {
        "counting"
    }

    async fn article_ids(&self) -> Result<Vec<ArticleId>> {
        self.inner.article_ids().await
    }

    async fn articles(&self, ids: &[ArticleId]) -> Result<Vec<Option<Article>>> {
        self.article_batches.lock().unwrap().push(ids.to_vec());
        self.inner.articles(ids).await
    }

    async fn update_article(
        &self,
        patch: &ArticlePatch,
        editor: UserId,
    ) -> Result<Option<Article>> {
        self.inner.update_article(patch, editor).await
    }

    async fn users(&self, ids: &[UserId]) -> Result<Vec<Option<User>>> {
        self.user_batches.lock().unwrap().push(ids.to_vec());
        self.inner.users(ids).await
    }

    async fn user_id_for_credential(&self, credential: &str) -> Result<Option<UserId>> {
        self.inner.user_id_for_credential(credential).await
    }
}

pub fn alice() -> User {
    User::new(1, "alice", "alice-token", ["admin"])
}

pub fn erin() -> User {
    User::new(2, "erin", "erin-token", ["editor"])
}

pub fn rory() -> User {
    User::new(3, "rory", "rory-token", ["reader"])
}

/// Three articles: A and B are public, C is readable by admins only.
pub fn abc_store() -> Arc<CountingStore> {
    let articles = vec![
        Article::new(1, "A", "alpha", 1).with_policy(AccessPolicy::new(Permissions::READ_ONLY)),
        Article::new(2, "B", "beta", 1).with_policy(AccessPolicy::new(Permissions::READ_ONLY)),
        Article::new(3, "C", "gamma", 1).with_policy(
            AccessPolicy::new(Permissions::NONE).with_role("admin", Permissions::READ_ONLY),
        ),
    ];
    let store = MemoryStore::new(vec![alice(), erin(), rory()], articles)
        .expect("test dataset should be valid");
    Arc::new(CountingStore::new(store))
}

/// Upcast for constructors taking `Arc<dyn ContentStore>`.
pub fn shared(store: &Arc<CountingStore>) -> Arc<dyn ContentStore> {
    Arc::clone(store) as Arc<dyn ContentStore>
}

pub fn ids(raw: &[i64]) -> Vec<ArticleId> {
    raw.iter().copied().map(ArticleId::new).collect()
}
