use crate::{GatewayState, cors::cors_layer, health, proxy};

use pm_config::CorsConfig;

use axum::{Router, routing::get};

/// Gateway router: local health endpoint, everything else is proxied
pub fn build_router(state: GatewayState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/gateway/health", get(health::health_check))
        .fallback(proxy::forward)
        .with_state(state)
        .layer(cors_layer(cors))
}
