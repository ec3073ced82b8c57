//! ShareIt gateway binary.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shareit_gateway::{api, config, GatewayState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shareit_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::init();
    tracing::info!(
        "Starting ShareIt gateway on {}:{}",
        config.server.host,
        config.server.port
    );

    let state = GatewayState::new().context("Failed to build upstream client")?;
    tracing::info!(upstream = state.client.base_url(), "Relaying to ShareIt server");
    let app = api::app(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
