//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tier_server::{api, config::CorsSettings, services::AccountService, state::AppState};
use tier_storage::MemoryAccountStore;
use tower::util::ServiceExt;

/// Create an app router backed by a fresh, empty store
pub fn create_test_app() -> Router {
    let accounts = Arc::new(AccountService::new(Arc::new(MemoryAccountStore::new())));
    api::create_router(AppState::new(accounts), &CorsSettings::default()).unwrap()
}

/// Send a JSON request and return status plus parsed body
pub async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };

    (status, body)
}

/// POST a JSON body
pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send_json(app, Method::POST, uri, body).await
}

/// Test account fixtures
pub mod fixtures {
    use serde_json::{json, Value};

    pub const TEST_NAME: &str = "Alice";
    pub const TEST_EMAIL: &str = "a@x.com";
    pub const TEST_PASSWORD: &str = "p1";
    pub const TEST_TRANSACTION_ID: &str = "tx123";

    pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

    pub fn register_body() -> Value {
        json!({"name": TEST_NAME, "email": TEST_EMAIL, "password": TEST_PASSWORD})
    }

    pub fn login_body(password: &str) -> Value {
        json!({"email": TEST_EMAIL, "password": password})
    }

    pub fn confirm_body(transaction_id: &str) -> Value {
        json!({"email": TEST_EMAIL, "transaction_id": transaction_id})
    }

    pub fn profile(plan: &str) -> Value {
        json!({"name": TEST_NAME, "email": TEST_EMAIL, "plan": plan})
    }
}
