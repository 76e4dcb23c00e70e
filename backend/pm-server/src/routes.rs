use crate::{
    AppState, activate_project, cors::cors_layer, create_project, deactivate_project,
    get_project, health, list_projects, list_projects_by_status, request_logging,
    update_project, update_project_by_path, update_project_status,
};

use pm_config::CorsConfig;

use axum::{
    Router, middleware,
    routing::{get, patch, post, put},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        // Project endpoints
        .route("/project/create", post(create_project))
        .route("/project/update", put(update_project))
        .route("/project/update/{id}", put(update_project_by_path))
        .route("/project/all", get(list_projects))
        .route("/project/UpdateStatus", put(update_project_status))
        .route("/project/getByStatus/{status}", get(list_projects_by_status))
        .route(
            "/project/activate/{id}",
            patch(activate_project).put(activate_project),
        )
        .route(
            "/project/deactivate/{id}",
            patch(deactivate_project).put(deactivate_project),
        )
        .route("/project/{id}", get(get_project))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        .layer(middleware::from_fn(request_logging::log_request))
        .layer(cors_layer(cors))
}
