//! Access-controlled content resolution.
//!
//! This crate joins the batch loader, the ACL engine, and a content store:
//!
//! - [`ContentRepository`]: permission-filtered listing, single reads, and
//!   edits that stay coherent with the request's article cache
//! - [`UserDirectory`]: credential → caller resolution through a user loader
//! - [`fetch`]: store-backed batch functions for both loaders
//!
//! Build one repository and one directory per request scope over a shared
//! `Arc<dyn ContentStore>`; caches never cross scopes.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use folio_content::{ContentRepository, UserDirectory};
//! use folio_storage::{seed, ContentStore, MemoryStore};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let store: Arc<dyn ContentStore> = Arc::new(MemoryStore::from_dataset(seed::demo()).unwrap());
//!
//! let directory = UserDirectory::new(Arc::clone(&store));
//! let repository = ContentRepository::new(store);
//!
//! let caller = directory.resolve(None).await.unwrap();
//! let titles: Vec<String> = repository
//!     .list_articles(&caller)
//!     .await
//!     .unwrap()
//!     .into_iter()
//!     .map(|a| a.title)
//!     .collect();
//! assert_eq!(titles, ["Welcome", "Release notes", "Scratchpad"]);
//! # });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod directory;
pub mod fetch;
pub mod repository;

pub use directory::UserDirectory;
pub use repository::ContentRepository;
