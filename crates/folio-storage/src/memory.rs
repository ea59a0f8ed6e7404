//! In-memory store.
//!
//! Holds the whole dataset in process memory. Articles are mutable through
//! [`ContentStore::update_article`]; users never change after construction.
//! Construct one store per dataset and share it (`Arc<dyn ContentStore>`)
//! across request scopes.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use folio_core::{Article, ArticleId, ArticlePatch, Result, User, UserId};

use crate::dataset::Dataset;
use crate::traits::ContentStore;

/// Dataset held in memory.
pub struct MemoryStore {
    articles: RwLock<Vec<Article>>,
    /// Position of each article in `articles`; ids never change.
    positions: HashMap<ArticleId, usize>,
    users: HashMap<UserId, User>,
    credentials: HashMap<String, UserId>,
}

impl MemoryStore {
    /// Build a store, rejecting duplicate ids or credentials.
    pub fn new(users: Vec<User>, articles: Vec<Article>) -> Result<Self> {
        Self::from_dataset(Dataset { users, articles })
    }

    /// Build a store from a dataset.
    pub fn from_dataset(dataset: Dataset) -> Result<Self> {
        dataset.validate()?;
        let Dataset { users, articles } = dataset;

        let positions = articles
            .iter()
            .enumerate()
            .map(|(pos, article)| (article.id, pos))
            .collect();
        let credentials = users
            .iter()
            .map(|user| (user.credential.clone(), user.id))
            .collect();
        let users = users.into_iter().map(|user| (user.id, user)).collect();

        Ok(Self {
            articles: RwLock::new(articles),
            positions,
            users,
            credentials,
        })
    }

    /// Current articles, in dataset order.
    pub fn snapshot(&self) -> Vec<Article> {
        self.read().clone()
    }

    /// Number of articles.
    pub fn article_count(&self) -> usize {
        self.positions.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Article>> {
        self.articles.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Article>> {
        self.articles.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn article_ids(&self) -> Result<Vec<ArticleId>> {
        Ok(self.read().iter().map(|article| article.id).collect())
    }

    async fn articles(&self, ids: &[ArticleId]) -> Result<Vec<Option<Article>>> {
        let articles = self.read();
        Ok(ids
            .iter()
            .map(|id| {
                self.positions
                    .get(id)
                    .and_then(|pos| articles.get(*pos))
                    .cloned()
            })
            .collect())
    }

    async fn update_article(
        &self,
        patch: &ArticlePatch,
        editor: UserId,
    ) -> Result<Option<Article>> {
        let Some(pos) = self.positions.get(&patch.id).copied() else {
            return Ok(None);
        };
        let mut articles = self.write();
        let Some(article) = articles.get_mut(pos) else {
            return Ok(None);
        };
        article.apply(patch, editor);
        log::debug!("Stored edit of article {} by user {editor}", article.id);
        Ok(Some(article.clone()))
    }

    async fn users(&self, ids: &[UserId]) -> Result<Vec<Option<User>>> {
        Ok(ids.iter().map(|id| self.users.get(id).cloned()).collect())
    }

    async fn user_id_for_credential(&self, credential: &str) -> Result<Option<UserId>> {
        Ok(self.credentials.get(credential).copied())
    }
}
