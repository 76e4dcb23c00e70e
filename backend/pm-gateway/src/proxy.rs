//! Forwarding handler: everything the router does not answer itself.

use crate::headers::{client_response_headers, request_id, upstream_request_headers};
use crate::{GatewayError, GatewayResult, GatewayState, MAX_BODY_BYTES};

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::{Body, to_bytes},
    extract::{ConnectInfo, Request, State},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use log::info;

pub async fn forward(
    State(state): State<GatewayState>,
    request: Request,
) -> GatewayResult<Response> {
    let started = Instant::now();
    let (parts, body) = request.into_parts();

    let path = parts.uri.path().to_string();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| path.clone());

    let route = state
        .routes
        .resolve(&path)
        .ok_or_else(|| GatewayError::route_not_found(path.as_str()))?;

    let request_id = request_id(&parts.headers);
    let client_ip = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    let headers = upstream_request_headers(&parts.headers, &request_id, client_ip);

    let body: Bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(GatewayError::from_body)?;

    let target = route.target_url(&path_and_query);
    log::debug!("[{}] {} {} -> {}", request_id, parts.method, path, target);

    let upstream_response = state
        .client
        .request(parts.method.clone(), &target)
        .headers(headers)
        .body(body)
        .timeout(state.request_timeout)
        .send()
        .await
        .map_err(|e| GatewayError::from_upstream(route.upstream(), e))?;

    let status = upstream_response.status();
    let response_headers = client_response_headers(upstream_response.headers(), &request_id);
    let response_body = upstream_response
        .bytes()
        .await
        .map_err(|e| GatewayError::from_upstream(route.upstream(), e))?;

    info!(
        "[{}] {} {} -> {} {} ({:?})",
        request_id,
        parts.method,
        path,
        route.upstream(),
        status.as_u16(),
        started.elapsed()
    );

    Ok((status, response_headers, Body::from(response_body)).into_response())
}
