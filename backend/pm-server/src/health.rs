use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use sqlx::SqlitePool;

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database_ok = database_reachable(&state.pool).await;

    let health = json!({
        "status": if database_ok { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": if database_ok { "operational" } else { "unavailable" },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    // Simple check: if we can respond, we're alive
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (can we serve project requests?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if database_reachable(&state.pool).await {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response()
    }
}

async fn database_reachable(pool: &SqlitePool) -> bool {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Database probe failed: {}", e);
            false
        }
    }
}
