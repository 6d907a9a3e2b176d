/*!
 * Common test utilities shared across the test suite.
 */

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use clozecoach::server::{router, AppState};
use clozecoach::Repository;

/// Build a router backed by a fresh in-memory database
pub fn test_router() -> Router {
    let repo = Repository::new_in_memory().expect("Failed to create in-memory repository");
    router(AppState::new(repo))
}

/// Send a request and decode the JSON response body
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Request failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
    };

    (status, value)
}

/// POST a JSON payload to the given path
pub async fn post_json(router: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    send(router, request).await
}

/// POST a JSON payload with an extra header
pub async fn post_json_with_header(
    router: &Router,
    path: &str,
    body: Value,
    header_name: &str,
    header_value: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header_name, header_value)
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    send(router, request).await
}

/// GET the given path
pub async fn get(router: &Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .expect("Failed to build request");

    send(router, request).await
}

/// Insert vocabulary for a session through the API, asserting success
pub async fn seed_vocab(router: &Router, session_id: &str, words: &[(&str, &str)]) {
    let payload = serde_json::json!({
        "session_id": session_id,
        "words": words
            .iter()
            .map(|(word, translation)| {
                serde_json::json!({ "target_word": word, "translation": translation })
            })
            .collect::<Vec<_>>(),
    });

    let (status, _body) = post_json(router, "/v1/vocab/bulk", payload).await;
    assert_eq!(status, StatusCode::OK, "Seeding vocabulary failed");
}
