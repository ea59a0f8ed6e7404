//! `ListArticles` and `EditArticle` through the typed service.

use folio_api::ContentService;
use folio_core::config::AclConfig;
use folio_core::{ArticlePatch, UserId};

use crate::common::{service, store, ADMIN, EDITOR, READER};

async fn titles(service: &ContentService, credential: Option<&str>) -> Vec<String> {
    let ctx = service.scope(credential).await.unwrap();
    service
        .list_articles(&ctx)
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.title)
        .collect()
}

#[tokio::test]
async fn test_listing_depends_on_caller() {
    let service = service();

    assert_eq!(titles(&service, None).await, ["A", "B"]);
    assert_eq!(titles(&service, Some(READER)).await, ["A", "B"]);
    assert_eq!(titles(&service, Some(ADMIN)).await, ["A", "B", "C"]);
}

#[tokio::test]
async fn test_unknown_credential_lists_as_anonymous() {
    let service = service();
    assert_eq!(titles(&service, Some("stolen")).await, ["A", "B"]);
}

#[tokio::test]
async fn test_edit_without_caller_is_unauthorized() {
    let service = service();
    let ctx = service.scope(None).await.unwrap();

    let err = service
        .edit_article(&ctx, ArticlePatch::new(1).title("x"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_edit_by_reader_is_forbidden() {
    let service = service();
    let ctx = service.scope(Some(READER)).await.unwrap();

    let err = service
        .edit_article(&ctx, ArticlePatch::new(1).title("x"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "FORBIDDEN");
    assert!(err.to_string().contains("admin, editor"));
}

#[tokio::test]
async fn test_edit_of_unknown_id_is_not_found() {
    let service = service();
    let ctx = service.scope(Some(ADMIN)).await.unwrap();

    let err = service
        .edit_article(&ctx, ArticlePatch::new(404).title("x"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_edit_updates_fields_and_editor() {
    let service = service();
    let ctx = service.scope(Some(EDITOR)).await.unwrap();

    let view = service
        .edit_article(&ctx, ArticlePatch::new(2).title("B2").content("beta two"))
        .await
        .expect("editor should be allowed to edit");

    assert_eq!(view.title, "B2");
    assert_eq!(view.content, "beta two");
    assert_eq!(view.last_edited_by, UserId::new(2));
}

#[tokio::test]
async fn test_edit_is_coherent_within_scope_and_persisted() {
    let service = service();
    let ctx = service.scope(Some(ADMIN)).await.unwrap();

    service.list_articles(&ctx).await.unwrap();
    service
        .edit_article(&ctx, ArticlePatch::new(1).title("A2"))
        .await
        .unwrap();
    let in_scope = service.list_articles(&ctx).await.unwrap();
    assert_eq!(in_scope[0].title, "A2");
    assert_eq!(in_scope[0].last_edited_by, UserId::new(1));

    assert_eq!(titles(&service, None).await, ["A2", "B"]);
}

#[tokio::test]
async fn test_custom_editor_roles() {
    let acl = AclConfig {
        editor_roles: vec!["reader".to_string()],
    };
    let service = ContentService::new(store(), &acl);

    let reader = service.scope(Some(READER)).await.unwrap();
    assert!(service
        .edit_article(&reader, ArticlePatch::new(1).title("by reader"))
        .await
        .is_ok());

    let admin = service.scope(Some(ADMIN)).await.unwrap();
    let err = service
        .edit_article(&admin, ArticlePatch::new(1).title("by admin"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "FORBIDDEN");
}
