use crate::UserId;

use axum::{body::Body, extract::FromRequestParts, http::Request};

async fn extract(request: Request<Body>) -> Option<String> {
    let (mut parts, _body) = request.into_parts();
    match UserId::from_request_parts(&mut parts, &()).await {
        Ok(UserId(user_id)) => user_id,
        Err(never) => match never {},
    }
}

#[tokio::test]
async fn test_extractor_with_header() {
    let request = Request::builder()
        .header("X-User-Id", "alice")
        .body(Body::empty())
        .unwrap();

    assert_eq!(extract(request).await.as_deref(), Some("alice"));
}

#[tokio::test]
async fn test_extractor_trims_header_value() {
    let request = Request::builder()
        .header("X-User-Id", "  bob  ")
        .body(Body::empty())
        .unwrap();

    assert_eq!(extract(request).await.as_deref(), Some("bob"));
}

#[tokio::test]
async fn test_extractor_without_header() {
    let request = Request::builder().body(Body::empty()).unwrap();

    assert_eq!(extract(request).await, None);
}

#[tokio::test]
async fn test_extractor_with_blank_header() {
    let request = Request::builder()
        .header("X-User-Id", "   ")
        .body(Body::empty())
        .unwrap();

    assert_eq!(extract(request).await, None);
}

#[tokio::test]
async fn test_extractor_header_name_is_case_insensitive() {
    let request = Request::builder()
        .header("x-user-id", "carol")
        .body(Body::empty())
        .unwrap();

    assert_eq!(extract(request).await.as_deref(), Some("carol"));
}
