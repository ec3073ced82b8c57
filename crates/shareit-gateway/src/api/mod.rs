//! Gateway routes.
//!
//! Mirrors the server's HTTP surface. Each handler validates its input and
//! then relays the untouched request upstream.

mod bookings;
mod items;
mod requests;
mod status;
mod users;

use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::middleware::require_sharer;
use crate::GatewayState;

/// Build the gateway router.
pub fn routes() -> Router<GatewayState> {
    Router::new()
        .merge(status::routes())
        .nest("/users", users::routes())
        .merge(sharer_routes())
}

fn sharer_routes() -> Router<GatewayState> {
    Router::new()
        .nest("/items", items::routes())
        .nest("/bookings", bookings::routes())
        .nest("/requests", requests::routes())
        .route_layer(middleware::from_fn(require_sharer))
}

/// Full gateway application with tracing and CORS.
pub fn app(state: GatewayState) -> Router {
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
