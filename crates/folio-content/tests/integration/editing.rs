//! Edits and cache coherence within a request scope.

use folio_content::ContentRepository;
use folio_core::{ArticleId, ArticlePatch, Caller, UserId};

use crate::common::{abc_store, alice, erin, shared};

#[tokio::test]
async fn test_edit_is_visible_to_later_reads_without_refetch() {
    let store = abc_store();
    let repo = ContentRepository::new(shared(&store));
    let caller = Caller::anonymous();

    let before = repo.find_article(ArticleId::new(1), &caller).await.unwrap();
    assert_eq!(before.title, "A");

    let edited = repo
        .edit_article(&ArticlePatch::new(1).title("A2").content("alpha two"), &erin())
        .await
        .expect("edit should succeed");
    assert_eq!(edited.title, "A2");
    assert_eq!(edited.last_edited_by, UserId::new(2));

    let after = repo.find_article(ArticleId::new(1), &caller).await.unwrap();
    assert_eq!(after.title, "A2");
    assert_eq!(after.content, "alpha two");
    assert_eq!(store.article_batches().len(), 1);
}

#[tokio::test]
async fn test_partial_edit_keeps_untouched_fields() {
    let store = abc_store();
    let repo = ContentRepository::new(shared(&store));

    let edited = repo
        .edit_article(&ArticlePatch::new(2).content("beta v2"), &alice())
        .await
        .unwrap();

    assert_eq!(edited.title, "B");
    assert_eq!(edited.content, "beta v2");
    assert_eq!(edited.last_edited_by, UserId::new(1));
}

#[tokio::test]
async fn test_listing_after_edit_uses_edited_entry() {
    let store = abc_store();
    let repo = ContentRepository::new(shared(&store));
    let caller = Caller::anonymous();

    repo.list_articles(&caller).await.unwrap();
    repo.edit_article(&ArticlePatch::new(2).title("B2"), &alice())
        .await
        .unwrap();

    let titles: Vec<String> = repo
        .list_articles(&caller)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.title)
        .collect();
    assert_eq!(titles, vec!["A", "B2"]);
    assert_eq!(store.article_batches().len(), 1);
}

#[tokio::test]
async fn test_new_scope_sees_stored_edit() {
    let store = abc_store();
    let first = ContentRepository::new(shared(&store));
    first
        .edit_article(&ArticlePatch::new(1).title("Persisted"), &alice())
        .await
        .unwrap();

    let second = ContentRepository::new(shared(&store));
    let article = second
        .find_article(ArticleId::new(1), &Caller::anonymous())
        .await
        .unwrap();

    assert_eq!(article.title, "Persisted");
}

#[tokio::test]
async fn test_edit_of_unknown_article_is_not_found() {
    let store = abc_store();
    let repo = ContentRepository::new(shared(&store));

    let err = repo
        .edit_article(&ArticlePatch::new(99).title("nope"), &alice())
        .await
        .unwrap_err();

    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.to_string(), "articles not found: 99");
}
