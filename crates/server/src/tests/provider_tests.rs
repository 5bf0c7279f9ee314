use super::*;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Upstream {
    seen: Arc<Mutex<Vec<(Option<String>, ChatCompletionRequest)>>>,
}

async fn completions(
    State(upstream): State<Upstream>,
    headers: HeaderMap,
    Json(request): Json<ChatCompletionRequest>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let user_text = request
        .messages
        .last()
        .map(|m| m.content.clone())
        .unwrap_or_default();
    upstream.seen.lock().expect("seen").push((auth, request));

    if user_text == "explode" {
        return Err(StatusCode::BAD_GATEWAY);
    }
    Ok(Json(serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": format!("  polite {user_text}\n") } }]
    })))
}

async fn spawn_upstream() -> (String, Upstream) {
    let upstream = Upstream::default();
    let app = Router::new()
        .route("/v1/chat/completions", post(completions))
        .with_state(upstream.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    (format!("http://{addr}/v1/"), upstream)
}

#[tokio::test]
async fn sends_system_and_user_messages_with_bearer_auth() {
    let (base_url, upstream) = spawn_upstream().await;
    let rewriter = ChatCompletionRewriter::new(&base_url, "gsk-test", "test-model").expect("rewriter");

    let content = rewriter
        .rewrite("be polite", "send the report")
        .await
        .expect("rewrite");

    assert_eq!(content, "  polite send the report\n");
    let seen = upstream.seen.lock().expect("seen");
    assert_eq!(seen.len(), 1);
    let (auth, request) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer gsk-test"));
    assert_eq!(request.model, "test-model");
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, "system");
    assert_eq!(request.messages[0].content, "be polite");
    assert_eq!(request.messages[1].role, "user");
}

#[tokio::test]
async fn upstream_failure_is_an_error() {
    let (base_url, _) = spawn_upstream().await;
    let rewriter = ChatCompletionRewriter::new(&base_url, "gsk-test", "test-model").expect("rewriter");

    assert!(rewriter.rewrite("be polite", "explode").await.is_err());
}

#[test]
fn rejects_invalid_base_url() {
    assert!(ChatCompletionRewriter::new("::nope::", "k", "m").is_err());
}
