//! Gateway liveness.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::GatewayState;

pub fn routes() -> Router<GatewayState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health - the gateway is up; the server is not contacted.
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
