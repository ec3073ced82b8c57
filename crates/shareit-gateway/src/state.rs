//! Shared state for gateway handlers.

use crate::client::ServerClient;
use crate::{config, Result};

#[derive(Clone)]
pub struct GatewayState {
    /// Client for the ShareIt server.
    pub client: ServerClient,
}

impl GatewayState {
    /// Build the state from the global configuration.
    pub fn new() -> Result<Self> {
        let config = config::config();
        let client = ServerClient::new(&config.upstream.url, config.upstream.timeout)?;
        Ok(Self { client })
    }

    pub fn with_client(client: ServerClient) -> Self {
        Self { client }
    }
}
