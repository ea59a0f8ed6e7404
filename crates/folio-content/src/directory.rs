//! Identity resolution.

use std::sync::Arc;

use folio_core::{Caller, Result, User, UserId};
use folio_loader::BatchLoader;
use folio_storage::ContentStore;

use crate::fetch::UserFetcher;

/// Loader name, also the `kind` of user `NotFound` errors.
pub const USERS: &str = "users";

/// Request-scoped user lookups.
///
/// Credentials are matched against the store as opaque strings; no token
/// verification happens here.
pub struct UserDirectory {
    store: Arc<dyn ContentStore>,
    users: BatchLoader<UserId, User>,
}

impl UserDirectory {
    /// Create a directory with a fresh user cache over `store`.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        let users = BatchLoader::new(USERS, UserFetcher::new(Arc::clone(&store)));
        Self { store, users }
    }

    /// Resolve the caller presenting `credential`.
    ///
    /// A missing or unknown credential yields an anonymous caller.
    pub async fn resolve(&self, credential: Option<&str>) -> Result<Caller> {
        let Some(credential) = credential else {
            return Ok(Caller::anonymous());
        };
        match self.store.user_id_for_credential(credential).await? {
            Some(id) => {
                let user = self.users.load(id).await?;
                log::debug!("Resolved caller '{}'", user.username);
                Ok(Caller::authenticated(user))
            }
            None => {
                log::debug!("Unknown credential, continuing as anonymous");
                Ok(Caller::anonymous())
            }
        }
    }

    /// Load a user by id.
    pub async fn user(&self, id: UserId) -> Result<User> {
        self.users.load(id).await
    }

    /// The user loader backing this directory.
    pub fn loader(&self) -> &BatchLoader<UserId, User> {
        &self.users
    }
}
