use pm_config::CorsConfig;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::headers::REQUEST_ID_HEADER;

/// Browser-facing CORS policy. Any request header is accepted by mirroring
/// the preflight's `Access-Control-Request-Headers`.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
        .allow_credentials(config.allow_credentials)
}
