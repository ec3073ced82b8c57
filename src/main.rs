//! ShareIt - item sharing server
//!
//! Users list items, book other users' items, and post requests for items
//! nobody offers yet.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shareit::{api, config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shareit=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::init();
    tracing::info!(
        "Starting ShareIt server on {}:{}",
        config.server.host,
        config.server.port
    );

    // Initialize application state
    let state = AppState::new()
        .await
        .context("Failed to initialize database")?;
    tracing::info!(database = %config.database.path, "Application state initialized");

    let app = api::app(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
