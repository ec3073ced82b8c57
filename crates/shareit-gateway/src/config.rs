//! Configuration management for the ShareIt gateway.
//!
//! Loads configuration from environment variables (a `.env` file in the
//! working directory is read first when present).

use std::env;
use std::sync::OnceLock;
use std::time::Duration;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Initialize configuration (call once at startup)
pub fn init() -> &'static Config {
    config()
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the ShareIt server, without a trailing slash.
    pub url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            server: ServerConfig {
                host: env_or("HOST", "0.0.0.0"),
                port: env_or("PORT", "8080").parse().unwrap_or(8080),
            },
            upstream: UpstreamConfig {
                url: env_or("SHAREIT_SERVER_URL", "http://localhost:9090")
                    .trim_end_matches('/')
                    .to_string(),
                timeout: Duration::from_secs(
                    env_or("UPSTREAM_TIMEOUT_SECS", "30").parse().unwrap_or(30),
                ),
            },
        }
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
