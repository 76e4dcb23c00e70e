//! Header rewriting for forwarded exchanges.

use std::net::IpAddr;

use axum::http::{HeaderMap, HeaderName, HeaderValue, header};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
pub const FORWARDED_HOST_HEADER: &str = "x-forwarded-host";

/// Connection-scoped headers (RFC 9110 §7.6.1) never cross a proxy
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

fn is_hop_by_hop(name: &HeaderName, connection_listed: &[String]) -> bool {
    HOP_BY_HOP.contains(&name.as_str()) || connection_listed.iter().any(|h| h == name.as_str())
}

/// Header names the sender listed in `Connection`; those are hop-by-hop too.
fn connection_listed(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Reuse the caller's request id or mint one.
pub fn request_id(incoming: &HeaderMap) -> String {
    incoming
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Headers to send upstream.
///
/// Drops hop-by-hop headers, `Host` (the client sets it for the upstream)
/// and `Content-Length` (recomputed from the buffered body). Adds the
/// request id and the `X-Forwarded-*` pair.
pub fn upstream_request_headers(
    incoming: &HeaderMap,
    request_id: &str,
    client_ip: Option<IpAddr>,
) -> HeaderMap {
    let listed = connection_listed(incoming);
    let mut out = HeaderMap::with_capacity(incoming.len() + 3);

    for (name, value) in incoming {
        if is_hop_by_hop(name, &listed) || name == header::HOST || name == header::CONTENT_LENGTH
        {
            continue;
        }
        out.append(name.clone(), value.clone());
    }

    if let Ok(value) = HeaderValue::from_str(request_id) {
        out.insert(REQUEST_ID_HEADER, value);
    }

    if let Some(ip) = client_ip {
        let forwarded_for = match incoming
            .get(FORWARDED_FOR_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            Some(existing) if !existing.trim().is_empty() => format!("{}, {}", existing, ip),
            _ => ip.to_string(),
        };
        if let Ok(value) = HeaderValue::from_str(&forwarded_for) {
            out.insert(FORWARDED_FOR_HEADER, value);
        }
    }

    if let Some(host) = incoming.get(header::HOST) {
        out.insert(FORWARDED_HOST_HEADER, host.clone());
    }

    out
}

/// Headers to relay back to the client.
///
/// Upstream `Access-Control-*` headers are dropped; the gateway's CORS
/// layer is the only source of those.
pub fn client_response_headers(upstream: &HeaderMap, request_id: &str) -> HeaderMap {
    let listed = connection_listed(upstream);
    let mut out = HeaderMap::with_capacity(upstream.len() + 1);

    for (name, value) in upstream {
        if is_hop_by_hop(name, &listed)
            || name == header::CONTENT_LENGTH
            || name.as_str().starts_with("access-control-")
        {
            continue;
        }
        out.append(name.clone(), value.clone());
    }

    if !out.contains_key(REQUEST_ID_HEADER)
        && let Ok(value) = HeaderValue::from_str(request_id)
    {
        out.insert(REQUEST_ID_HEADER, value);
    }

    out
}
