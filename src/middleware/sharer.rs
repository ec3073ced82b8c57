//! Acting-user header middleware.

use axum::{body::Body, extract::Request, http::HeaderMap, middleware::Next, response::Response};
use shareit_models::{Id, SHARER_HEADER};
use tracing::debug;

use crate::error::Error;

/// Id of the user making the request, injected into request extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SharerId(pub Id);

/// Parse the acting user's id from request headers.
pub fn sharer_from_headers(headers: &HeaderMap) -> Result<SharerId, Error> {
    headers
        .get(SHARER_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<Id>().ok())
        .map(SharerId)
        .ok_or(Error::MissingSharer(SHARER_HEADER))
}

/// Middleware that requires a numeric `X-Sharer-User-Id` header.
///
/// The user is not looked up here; services report unknown ids as 404.
///
/// # Errors
///
/// Returns 400 Bad Request if the header is missing or not an integer.
pub async fn require_sharer(mut req: Request<Body>, next: Next) -> Result<Response, Error> {
    let sharer = sharer_from_headers(req.headers())?;
    debug!(user_id = sharer.0, path = %req.uri().path(), "Sharer resolved");
    req.extensions_mut().insert(sharer);
    Ok(next.run(req).await)
}
