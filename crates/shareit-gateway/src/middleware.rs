//! Acting-user header middleware.

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use shareit_models::{Id, SHARER_HEADER};

use crate::error::Error;

/// Id of the user making the request, injected into request extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SharerId(pub Id);

/// Middleware that requires a numeric `X-Sharer-User-Id` header.
///
/// # Errors
///
/// Returns 400 Bad Request if the header is missing or not an integer.
pub async fn require_sharer(mut req: Request<Body>, next: Next) -> Result<Response, Error> {
    let sharer = req
        .headers()
        .get(SHARER_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<Id>().ok())
        .map(SharerId)
        .ok_or(Error::MissingHeader(SHARER_HEADER))?;

    req.extensions_mut().insert(sharer);
    Ok(next.run(req).await)
}
