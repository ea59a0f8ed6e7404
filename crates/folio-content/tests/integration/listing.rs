//! Permission-filtered listing and read coalescing.

use folio_content::ContentRepository;
use folio_core::{Article, ArticleId, Caller};
use folio_storage::MemoryStore;
use std::sync::Arc;

use crate::common::{abc_store, alice, erin, ids, shared};

fn titles(articles: Vec<Article>) -> Vec<String> {
    articles.into_iter().map(|a| a.title).collect()
}

#[tokio::test]
async fn test_anonymous_sees_public_articles_in_order() {
    let store = abc_store();
    let repo = ContentRepository::new(shared(&store));

    let listed = repo.list_articles(&Caller::anonymous()).await.unwrap();

    assert_eq!(titles(listed), vec!["A", "B"]);
}

#[tokio::test]
async fn test_admin_sees_restricted_article() {
    let store = abc_store();
    let repo = ContentRepository::new(shared(&store));

    let listed = repo
        .list_articles(&Caller::authenticated(alice()))
        .await
        .unwrap();

    assert_eq!(titles(listed), vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_role_without_entry_does_not_see_restricted_article() {
    let store = abc_store();
    let repo = ContentRepository::new(shared(&store));

    let listed = repo
        .list_articles(&Caller::authenticated(erin()))
        .await
        .unwrap();

    assert_eq!(titles(listed), vec!["A", "B"]);
}

#[tokio::test]
async fn test_listing_loads_everything_in_one_batch() {
    let store = abc_store();
    let repo = ContentRepository::new(shared(&store));

    repo.list_articles(&Caller::anonymous()).await.unwrap();

    assert_eq!(store.article_batches(), vec![ids(&[1, 2, 3])]);
}

#[tokio::test]
async fn test_second_listing_in_scope_is_served_from_cache() {
    let store = abc_store();
    let repo = ContentRepository::new(shared(&store));
    let admin = Caller::authenticated(alice());

    let first = titles(repo.list_articles(&Caller::anonymous()).await.unwrap());
    let second = titles(repo.list_articles(&admin).await.unwrap());

    assert_eq!(first, vec!["A", "B"]);
    assert_eq!(second, vec!["A", "B", "C"]);
    assert_eq!(store.article_batches().len(), 1);
}

#[tokio::test]
async fn test_scopes_do_not_share_caches() {
    let store = abc_store();
    let first_scope = ContentRepository::new(shared(&store));
    let second_scope = ContentRepository::new(shared(&store));

    first_scope.list_articles(&Caller::anonymous()).await.unwrap();
    second_scope.list_articles(&Caller::anonymous()).await.unwrap();

    assert_eq!(store.article_batches().len(), 2);
}

#[tokio::test]
async fn test_concurrent_reads_coalesce() {
    let store = abc_store();
    let repo = ContentRepository::new(shared(&store));
    let caller = Caller::anonymous();

    let (a, b, again) = tokio::join!(
        repo.find_article(ArticleId::new(2), &caller),
        repo.find_article(ArticleId::new(1), &caller),
        repo.find_article(ArticleId::new(2), &caller),
    );

    assert_eq!(a.unwrap().title, "B");
    assert_eq!(b.unwrap().title, "A");
    assert_eq!(again.unwrap().title, "B");
    assert_eq!(store.article_batches(), vec![ids(&[2, 1])]);
}

#[tokio::test]
async fn test_unrestricted_article_is_listed_for_anonymous() {
    let store = MemoryStore::new(vec![], vec![Article::new(7, "Open", "no policy", 1)])
        .expect("valid dataset");
    let repo = ContentRepository::new(Arc::new(store));

    let listed = repo.list_articles(&Caller::anonymous()).await.unwrap();

    assert_eq!(titles(listed), vec!["Open"]);
}
