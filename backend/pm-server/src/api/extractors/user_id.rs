//! Axum extractor for the optional acting-user header

use std::convert::Infallible;
use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

pub const USER_ID_HEADER: &str = "X-User-Id";

/// Who is making the request, as reported by the `X-User-Id` header.
///
/// The value is free text and is only used to fill `createdBy` /
/// `updatedBy` when the payload leaves them out. A missing, blank or
/// non-UTF-8 header yields `UserId(None)`.
pub struct UserId(pub Option<String>);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(header_value) = parts.headers.get(USER_ID_HEADER) else {
                return Ok(UserId(None));
            };

            match header_value.to_str() {
                Ok(value) if !value.trim().is_empty() => {
                    log::debug!("Using user ID from {} header: {}", USER_ID_HEADER, value);
                    Ok(UserId(Some(value.trim().to_string())))
                }
                Ok(_) => Ok(UserId(None)),
                Err(_) => {
                    log::warn!("Ignoring non-UTF-8 {} header", USER_ID_HEADER);
                    Ok(UserId(None))
                }
            }
        }
    }
}
