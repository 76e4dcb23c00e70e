use crate::GatewayState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /gateway/health - answered locally, upstreams are not probed
pub async fn health_check(State(state): State<GatewayState>) -> Response {
    let routes: Vec<_> = state
        .routes
        .routes()
        .iter()
        .map(|r| json!({ "prefix": r.prefix(), "upstream": r.upstream() }))
        .collect();

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "routes": routes,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}
