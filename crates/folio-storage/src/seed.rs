//! Built-in demo dataset.

use folio_core::{AccessPolicy, Article, Permissions, User};

use crate::dataset::Dataset;

/// A small dataset exercising every policy shape.
///
/// | id | title              | policy                                   |
/// |----|--------------------|------------------------------------------|
/// | 1  | Welcome            | everyone: read                           |
/// | 2  | Release notes      | everyone: read; editor: read/write       |
/// | 3  | Incident review    | everyone: none; admin: read/write        |
/// | 4  | Scratchpad         | none (unrestricted)                      |
///
/// Users: `alice` (admin, credential `alice-token`), `erin` (editor,
/// `erin-token`), `rory` (reader, `rory-token`).
pub fn demo() -> Dataset {
    let users = vec![
        User::new(1, "alice", "alice-token", ["admin"]),
        User::new(2, "erin", "erin-token", ["editor"]),
        User::new(3, "rory", "rory-token", ["reader"]),
    ];

    let articles = vec![
        Article::new(1, "Welcome", "Start here.", 1)
            .with_policy(AccessPolicy::new(Permissions::READ_ONLY)),
        Article::new(2, "Release notes", "What changed this week.", 2).with_policy(
            AccessPolicy::new(Permissions::READ_ONLY).with_role("editor", Permissions::READ_WRITE),
        ),
        Article::new(3, "Incident review", "Timeline and follow-ups.", 1).with_policy(
            AccessPolicy::new(Permissions::NONE).with_role("admin", Permissions::READ_WRITE),
        ),
        Article::new(4, "Scratchpad", "Anything goes.", 3),
    ];

    Dataset { users, articles }
}
