//! Driving the service with JSON requests.

use folio_api::{Request, Response};
use serde_json::{json, Value};

use crate::common::{service, ADMIN, READER};

async fn run(credential: Option<&str>, requests: Value) -> Value {
    let service = service();
    let ctx = service.scope(credential).await.unwrap();
    let requests: Vec<Request> = serde_json::from_value(requests).unwrap();

    let mut responses: Vec<Response> = Vec::new();
    for request in requests {
        responses.push(service.handle(&ctx, request).await);
    }
    serde_json::to_value(responses).unwrap()
}

#[tokio::test]
async fn test_list_request() {
    let out = run(None, json!([{"op": "listArticles"}])).await;

    assert_eq!(
        out,
        json!([{"data": [
            {"title": "A", "id": 1, "content": "alpha", "lastEditedBy": 1},
            {"title": "B", "id": 2, "content": "beta", "lastEditedBy": 1}
        ]}])
    );
}

#[tokio::test]
async fn test_edit_then_list_in_one_scope() {
    let out = run(
        Some(ADMIN),
        json!([
            {"op": "editArticle", "id": 3, "title": "C2"},
            {"op": "listArticles"}
        ]),
    )
    .await;

    assert_eq!(out[0]["data"]["title"], "C2");
    assert_eq!(out[0]["data"]["content"], "gamma");
    assert_eq!(out[1]["data"][2]["title"], "C2");
}

#[tokio::test]
async fn test_errors_are_reported_per_request() {
    let out = run(
        Some(READER),
        json!([
            {"op": "editArticle", "id": 1, "title": "nope"},
            {"op": "listArticles"}
        ]),
    )
    .await;

    assert_eq!(out[0]["error"]["code"], "FORBIDDEN");
    assert_eq!(out[1]["data"][0]["title"], "A");
}

#[tokio::test]
async fn test_policy_never_serialized() {
    let out = run(Some(ADMIN), json!([{"op": "listArticles"}])).await;
    for article in out[0]["data"].as_array().unwrap() {
        assert!(article.get("policy").is_none());
        assert!(article.get("accessPolicy").is_none());
    }
}
