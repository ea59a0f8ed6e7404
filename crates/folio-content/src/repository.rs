//! Article repository.
//!
//! The only place data access and authorization meet. Reads go through a
//! request-scoped [`BatchLoader`]; edits are applied to the shared store and
//! then written back into the same loader, so every read in the scope sees
//! one representation of each article.

use std::sync::Arc;

use folio_acl::AclEngine;
use folio_core::{Article, ArticleId, ArticlePatch, Caller, Error, Operation, Result, User};
use folio_loader::BatchLoader;
use folio_storage::ContentStore;

use crate::fetch::ArticleFetcher;

/// Loader name, also the `kind` of article `NotFound` errors.
pub const ARTICLES: &str = "articles";

/// Request-scoped access to articles.
pub struct ContentRepository {
    store: Arc<dyn ContentStore>,
    articles: BatchLoader<ArticleId, Article>,
    acl: AclEngine,
}

impl ContentRepository {
    /// Create a repository with a fresh article cache over `store`.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        let articles = BatchLoader::new(ARTICLES, ArticleFetcher::new(Arc::clone(&store)));
        Self {
            store,
            articles,
            acl: AclEngine::new(),
        }
    }

    /// The article loader backing this repository.
    pub fn loader(&self) -> &BatchLoader<ArticleId, Article> {
        &self.articles
    }

    /// Every article `caller` may read, in dataset order.
    ///
    /// All articles are loaded as one batch. The result owns its articles
    /// and does not borrow `caller`.
    pub async fn list_articles(&self, caller: &Caller) -> Result<Vec<Article>> {
        let ids = self.store.article_ids().await?;
        let articles = self
            .articles
            .load_many(ids)
            .await
            .into_iter()
            .collect::<Result<Vec<_>>>()?;
        Ok(self.acl.filter_readable(articles, caller).collect())
    }

    /// One article, if it exists and `caller` may read it.
    ///
    /// Unreadable articles are reported as `NotFound`.
    pub async fn find_article(&self, id: ArticleId, caller: &Caller) -> Result<Article> {
        let article = self.articles.load(id).await?;
        if self.acl.has_permission(&article, caller, Operation::Read) {
            Ok(article)
        } else {
            Err(Error::not_found(ARTICLES, id))
        }
    }

    /// Apply `patch` as `editor` and return the updated article.
    ///
    /// Role gating happens before this call. The updated article replaces
    /// the cached entry in one step and is then served from that entry.
    pub async fn edit_article(&self, patch: &ArticlePatch, editor: &User) -> Result<Article> {
        let updated = self
            .store
            .update_article(patch, editor.id)
            .await?
            .ok_or_else(|| Error::not_found(ARTICLES, patch.id))?;

        self.articles.clear_and_prime(patch.id, updated);
        self.articles.load(patch.id).await
    }
}

impl std::fmt::Debug for ContentRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentRepository")
            .field("store", &self.store.name())
            .field("articles", &self.articles)
            .finish()
    }
}
