//! Common test utilities for folio-api integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use folio_api::ContentService;
use folio_core::config::AclConfig;
use folio_core::{AccessPolicy, Article, Permissions, User};
use folio_storage::{ContentStore, MemoryStore};

pub const ADMIN: &str = "alice-token";
pub const EDITOR: &str = "erin-token";
pub const READER: &str = "rory-token";

/// A and B are public; C is visible to admins only.
pub fn store() -> Arc<dyn ContentStore> {
    let users = vec![
        User::new(1, "alice", ADMIN, ["admin"]),
        User::new(2, "erin", EDITOR, ["editor"]),
        User::new(3, "rory", READER, ["reader"]),
    ];
    let articles = vec![
        Article::new(1, "A", "alpha", 1).with_policy(AccessPolicy::new(Permissions::READ_ONLY)),
        Article::new(2, "B", "beta", 1).with_policy(AccessPolicy::new(Permissions::READ_ONLY)),
        Article::new(3, "C", "gamma", 1).with_policy(
            AccessPolicy::new(Permissions::NONE).with_role("admin", Permissions::READ_ONLY),
        ),
    ];
    Arc::new(MemoryStore::new(users, articles).expect("test dataset should be valid"))
}

pub fn service() -> ContentService {
    ContentService::new(store(), &AclConfig::default())
}
