//! Conversation management integration tests
//!
//! Covers the conversation list, title behavior, renaming, and the
//! per-conversation messages route.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::TestApp;

/// Helper: build a JSON request
fn json_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    if let Some(b) = body {
        builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    }
}

/// Helper: parse response body as JSON Value
async fn parse_body(response: axum::http::Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Helper: send one message and return the conversation id
async fn start_conversation(app: &TestApp, message: &str) -> String {
    let req = json_request(Method::POST, "/api/chat", Some(json!({"message": message})));
    let resp = app.test_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = parse_body(resp).await;
    body["conversationId"].as_str().unwrap().to_string()
}

/// Helper: fetch the conversation list
async fn list_conversations(app: &TestApp) -> Value {
    let req = json_request(Method::GET, "/api/conversations", None);
    let resp = app.test_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    parse_body(resp).await
}

mod test_list_conversations {
    use super::*;

    #[tokio::test]
    async fn test_list_is_empty_before_any_chat() {
        let app = TestApp::new();

        let body = list_conversations(&app).await;
        assert_eq!(body.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_list_orders_by_most_recent_activity() {
        let app = TestApp::new();

        let older = start_conversation(&app, "alpha").await;
        let newer = start_conversation(&app, "beta").await;

        let body = list_conversations(&app).await;
        assert_eq!(body[0]["id"].as_str().unwrap(), newer);
        assert_eq!(body[1]["id"].as_str().unwrap(), older);

        // A new message bumps the older conversation back to the top
        let req = json_request(
            Method::POST,
            "/api/chat",
            Some(json!({"message": "again", "conversationId": older})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = list_conversations(&app).await;
        assert_eq!(body[0]["id"].as_str().unwrap(), older);
    }

    #[tokio::test]
    async fn test_list_titles_come_from_first_user_message() {
        let app = TestApp::new();

        start_conversation(&app, "What is the capital of France?").await;

        let body = list_conversations(&app).await;
        assert_eq!(body[0]["title"], "What is the capital of France?");
    }

    #[tokio::test]
    async fn test_long_first_messages_produce_truncated_titles() {
        let app = TestApp::new();

        start_conversation(&app, &"m".repeat(60)).await;

        let body = list_conversations(&app).await;
        let title = body[0]["title"].as_str().unwrap();
        assert_eq!(title, format!("{}...", "m".repeat(50)));
    }
}

mod test_rename_conversation {
    use super::*;

    #[tokio::test]
    async fn test_rename_updates_the_listed_title() {
        let app = TestApp::new();

        let id = start_conversation(&app, "Hello").await;

        let req = json_request(
            Method::PATCH,
            &format!("/api/conversations/{}", id),
            Some(json!({"title": "Trip planning"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert_eq!(body["id"].as_str().unwrap(), id);
        assert_eq!(body["title"], "Trip planning");

        let listed = list_conversations(&app).await;
        assert_eq!(listed[0]["title"], "Trip planning");
    }

    #[tokio::test]
    async fn test_rename_unknown_conversation_returns_404() {
        let app = TestApp::new();

        let req = json_request(
            Method::PATCH,
            &format!("/api/conversations/{}", Uuid::new_v4()),
            Some(json!({"title": "Trip planning"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_rename_with_empty_title_is_rejected() {
        let app = TestApp::new();

        let id = start_conversation(&app, "Hello").await;

        let req = json_request(
            Method::PATCH,
            &format!("/api/conversations/{}", id),
            Some(json!({"title": "   "})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rename_with_oversized_title_is_rejected() {
        let app = TestApp::new();

        let id = start_conversation(&app, "Hello").await;

        let req = json_request(
            Method::PATCH,
            &format!("/api/conversations/{}", id),
            Some(json!({"title": "t".repeat(201)})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

mod test_conversation_messages {
    use super::*;

    #[tokio::test]
    async fn test_messages_route_matches_chat_history() {
        let app = TestApp::new();

        let id = start_conversation(&app, "Hello").await;

        let req = json_request(
            Method::GET,
            &format!("/api/conversations/{}/messages", id),
            None,
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let from_messages_route = parse_body(resp).await;

        let req = json_request(Method::GET, &format!("/api/chat/{}", id), None);
        let resp = app.test_router().oneshot(req).await.unwrap();
        let from_history_route = parse_body(resp).await;

        assert_eq!(from_messages_route, from_history_route);
    }

    #[tokio::test]
    async fn test_messages_route_unknown_conversation_returns_404() {
        let app = TestApp::new();

        let req = json_request(
            Method::GET,
            &format!("/api/conversations/{}/messages", Uuid::new_v4()),
            None,
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
