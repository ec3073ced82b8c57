//! API Routes for ShareIt
//!
//! This module combines all API routes into a single router.
//! Routes are organized by domain and apply appropriate middleware.

mod bookings;
mod extract;
mod items;
mod requests;
pub mod status;
mod users;

use axum::{middleware, Router};

use crate::middleware::require_sharer;
use crate::AppState;

/// Build the complete API router.
///
/// Route structure:
/// - /users/* - User directory (no caller identity)
/// - /items/*, /bookings/*, /requests/* - Require `X-Sharer-User-Id`
/// - /health - Health check
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(status::routes())
        .nest("/users", users::routes())
        .merge(sharer_routes())
}

/// Routes acting on behalf of the user named in `X-Sharer-User-Id`.
fn sharer_routes() -> Router<AppState> {
    Router::new()
        .nest("/items", items::routes())
        .nest("/bookings", bookings::routes())
        .nest("/requests", requests::routes())
        .route_layer(middleware::from_fn(require_sharer))
}

/// Full application router with tracing and CORS, ready to serve.
pub fn app(state: AppState) -> Router {
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::trace::TraceLayer;

    Router::new()
        .merge(routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
