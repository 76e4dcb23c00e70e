#![allow(dead_code)]

//! Test infrastructure for gateway tests

use pm_config::{CorsConfig, GatewayConfig, RouteConfig};
use pm_gateway::{GatewayState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Gateway routing `/project` to `upstream`
pub fn gateway_for(upstream: &str) -> Router {
    gateway_with(upstream, 30)
}

pub fn gateway_with(upstream: &str, request_timeout_secs: u64) -> Router {
    let config = GatewayConfig {
        request_timeout_secs,
        routes: vec![RouteConfig::new("/project", upstream)],
        ..GatewayConfig::default()
    };
    let state = GatewayState::new(&config).expect("Failed to build gateway state");
    build_router(state, &CorsConfig::default())
}

/// Address nothing listens on
pub fn closed_upstream() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");
    drop(listener);
    format!("http://{}", addr)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
