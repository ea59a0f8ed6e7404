//! Caller resolution through the user directory.

use folio_content::UserDirectory;
use folio_core::UserId;

use crate::common::{abc_store, shared};

#[tokio::test]
async fn test_resolve_loads_user_through_loader() {
    let store = abc_store();
    let directory = UserDirectory::new(shared(&store));

    let caller = directory.resolve(Some("erin-token")).await.unwrap();

    assert_eq!(caller.user().unwrap().username, "erin");
    assert!(caller.user().unwrap().has_role("editor"));
    assert_eq!(store.user_batches(), vec![vec![UserId::new(2)]]);
}

#[tokio::test]
async fn test_repeated_resolution_hits_cache() {
    let store = abc_store();
    let directory = UserDirectory::new(shared(&store));

    directory.resolve(Some("alice-token")).await.unwrap();
    directory.resolve(Some("alice-token")).await.unwrap();
    directory.user(UserId::new(1)).await.unwrap();

    assert_eq!(store.user_batches().len(), 1);
}

#[tokio::test]
async fn test_anonymous_resolution_fetches_nothing() {
    let store = abc_store();
    let directory = UserDirectory::new(shared(&store));

    assert!(directory.resolve(None).await.unwrap().is_anonymous());
    assert!(directory.resolve(Some("bogus")).await.unwrap().is_anonymous());
    assert!(store.user_batches().is_empty());
}
