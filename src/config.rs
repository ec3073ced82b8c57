//! Configuration management for the ShareIt server.
//!
//! Loads configuration from environment variables (a `.env` file in the
//! working directory is read first when present).

use std::env;
use std::sync::OnceLock;

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
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite path, or `:memory:`.
    pub path: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            server: ServerConfig {
                host: env_or("HOST", "0.0.0.0"),
                port: env_or("PORT", "9090").parse().unwrap_or(9090),
            },
            database: DatabaseConfig {
                path: env_or("DATABASE_PATH", "./data/shareit.db"),
                max_connections: env_or("DATABASE_MAX_CONNECTIONS", "10")
                    .parse()
                    .unwrap_or(10),
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
