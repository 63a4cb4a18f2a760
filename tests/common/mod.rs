//! Common test utilities
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::util::ServiceExt;

use track_expenses::api;
use track_expenses::store::InMemoryStore;
use track_expenses::AppState;

/// Setup a fresh application over an empty in-memory store
pub fn setup_test_app() -> (Router, Arc<InMemoryStore>) {
    let (state, store) = AppState::in_memory();
    (api::build_app(state), store)
}

/// Send a JSON request and return the status and parsed body
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: &impl serde::Serialize,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("accept", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap();

    send(app, request).await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
