use pm_config::CorsConfig;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// CORS policy for the project service, built from `[cors]`.
///
/// Request headers are mirrored rather than wildcarded because browsers
/// refuse `*` on credentialed requests.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        log::warn!("Skipping unusable CORS origin '{}'", origin);
                        None
                    }
                }),
        )
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.allow_credentials)
}
