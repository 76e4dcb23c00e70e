#![allow(dead_code)]

//! Test infrastructure for pm-server API tests

use pm_config::{CorsConfig, ValidationConfig};
use pm_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    pm_db::open_in_memory_pool()
        .await
        .expect("Failed to create test database")
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState::new(create_test_pool().await, ValidationConfig::default())
}

pub fn test_router(state: AppState) -> Router {
    build_router(state, &CorsConfig::default())
}

/// Send one request through a fresh clone of the router
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Create a project through the API and return its JSON
pub async fn create_project(app: &Router, body: serde_json::Value) -> serde_json::Value {
    let response = send(app, json_request("POST", "/project/create", body)).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}
