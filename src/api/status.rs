//! Status Routes
//!
//! Routes:
//! - GET /health - Liveness plus a database ping

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tracing::error;

use crate::{db, AppState};

/// Build status routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub database: DatabaseCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize)]
pub struct DatabaseCheck {
    pub status: HealthStatus,
    pub latency_ms: u64,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check.
///
/// GET /health
///
/// Returns 503 when the database does not answer.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let status = match db::health_check(&state.db).await {
        Ok(()) => HealthStatus::Healthy,
        Err(e) => {
            error!(error = %e, "Database health check failed");
            HealthStatus::Unhealthy
        }
    };

    let code = if status == HealthStatus::Healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION").into(),
            database: DatabaseCheck {
                status,
                latency_ms: started.elapsed().as_millis() as u64,
            },
        }),
    )
}
