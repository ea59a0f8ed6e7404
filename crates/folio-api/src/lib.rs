//! # folio-api
//!
//! Transport-agnostic API for Folio.
//!
//! - [`RequestContext`]: one request scope (caller plus fresh loaders)
//! - [`ContentService`]: the `ListArticles` and `EditArticle` operations
//! - [`envelope`]: JSON request/response shapes for driving the service
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use folio_api::ContentService;
//! use folio_core::{ArticlePatch, FolioConfig};
//! use folio_storage::{seed, MemoryStore};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let store = Arc::new(MemoryStore::from_dataset(seed::demo()).unwrap());
//! let service = ContentService::new(store, &FolioConfig::default().acl);
//!
//! let ctx = service.scope(Some("erin-token")).await.unwrap();
//! let edited = service
//!     .edit_article(&ctx, ArticlePatch::new(1).title("Hello"))
//!     .await
//!     .unwrap();
//! assert_eq!(edited.title, "Hello");
//! assert_eq!(edited.last_edited_by.get(), 2);
//! # });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod context;
pub mod envelope;
pub mod service;

pub use context::RequestContext;
pub use envelope::{ErrorBody, Payload, Request, Response};
pub use service::ContentService;
