//! The Folio RPC surface.

use std::sync::Arc;

use folio_acl::AclEngine;
use folio_core::config::AclConfig;
use folio_core::{Article, ArticlePatch, ArticleView, Result};
use folio_storage::ContentStore;

use crate::context::RequestContext;
use crate::envelope::{Payload, Request, Response};

/// Long-lived service over a shared store.
///
/// The service itself holds no per-request state; every call takes the
/// [`RequestContext`] it runs in.
pub struct ContentService {
    store: Arc<dyn ContentStore>,
    editor_roles: Vec<String>,
    acl: AclEngine,
}

impl ContentService {
    /// Create a service gating edits on `acl.editor_roles`.
    pub fn new(store: Arc<dyn ContentStore>, acl: &AclConfig) -> Self {
        Self {
            store,
            editor_roles: acl.editor_roles.clone(),
            acl: AclEngine::new(),
        }
    }

    /// Roles of which a caller needs at least one to edit.
    pub fn editor_roles(&self) -> &[String] {
        &self.editor_roles
    }

    /// Open a request scope for the caller presenting `credential`.
    pub async fn scope(&self, credential: Option<&str>) -> Result<RequestContext> {
        RequestContext::new(Arc::clone(&self.store), credential).await
    }

    /// `ListArticles`: every article the scope's caller may read.
    pub async fn list_articles(&self, ctx: &RequestContext) -> Result<Vec<ArticleView>> {
        let articles = ctx.articles().list_articles(ctx.caller()).await?;
        Ok(articles.iter().map(Article::view).collect())
    }

    /// `EditArticle`: apply `patch` as the scope's caller.
    ///
    /// Fails with `Unauthorized` without a caller, `Forbidden` when the
    /// caller holds no editor role, and `NotFound` for an unknown id.
    pub async fn edit_article(
        &self,
        ctx: &RequestContext,
        patch: ArticlePatch,
    ) -> Result<ArticleView> {
        let editor = self.acl.require_role(ctx.caller(), &self.editor_roles)?;
        let article = ctx.articles().edit_article(&patch, editor).await?;
        log::info!("Article {} edited by '{}'", article.id, editor.username);
        Ok(article.view())
    }

    /// Dispatch one envelope request within `ctx`.
    pub async fn handle(&self, ctx: &RequestContext, request: Request) -> Response {
        let result = match request {
            Request::ListArticles => self.list_articles(ctx).await.map(Payload::Articles),
            Request::EditArticle(patch) => {
                self.edit_article(ctx, patch).await.map(Payload::Article)
            }
        };
        Response::from(result)
    }
}

impl std::fmt::Debug for ContentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentService")
            .field("store", &self.store.name())
            .field("editor_roles", &self.editor_roles)
            .finish()
    }
}
