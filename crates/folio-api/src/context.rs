//! Request scopes.

use std::sync::Arc;

use folio_content::{ContentRepository, UserDirectory};
use folio_core::{Caller, Result};
use folio_storage::ContentStore;

/// Everything one request needs: the resolved caller and loaders whose
/// caches live exactly as long as the request.
///
/// Contexts are cheap to build and must not be shared between requests.
pub struct RequestContext {
    caller: Caller,
    users: UserDirectory,
    articles: ContentRepository,
}

impl RequestContext {
    /// Open a scope over `store`, resolving `credential` once.
    pub async fn new(store: Arc<dyn ContentStore>, credential: Option<&str>) -> Result<Self> {
        let users = UserDirectory::new(Arc::clone(&store));
        let caller = users.resolve(credential).await?;
        let articles = ContentRepository::new(store);
        Ok(Self {
            caller,
            users,
            articles,
        })
    }

    /// The caller this scope acts for.
    pub fn caller(&self) -> &Caller {
        &self.caller
    }

    /// Scoped article repository.
    pub fn articles(&self) -> &ContentRepository {
        &self.articles
    }

    /// Scoped user directory.
    pub fn users(&self) -> &UserDirectory {
        &self.users
    }
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field(
                "caller",
                &self.caller.user().map(|u| u.username.as_str()),
            )
            .field("articles", &self.articles)
            .finish_non_exhaustive()
    }
}
