//! SQLite connection pool configuration and utilities.

use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Pool configuration options.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
    /// Minimum number of connections to maintain.
    pub min_connections: u32,
    /// Timeout for acquiring a connection.
    pub acquire_timeout: Duration,
    /// Maximum idle time before a connection is closed.
    pub idle_timeout: Option<Duration>,
    /// Maximum lifetime of a connection.
    pub max_lifetime: Option<Duration>,
    /// SQLite busy timeout.
    pub busy_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(600)),
            max_lifetime: Some(Duration::from_secs(1800)),
            busy_timeout: Duration::from_secs(30),
        }
    }
}

impl PoolConfig {
    /// Create a new pool configuration with sensible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Single long-lived connection.
    ///
    /// Every connection to `:memory:` opens a separate database, so an
    /// in-memory pool must never open a second one or recycle the first.
    pub fn in_memory() -> Self {
        Self {
            max_connections: 1,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: None,
            max_lifetime: None,
            busy_timeout: Duration::from_secs(5),
        }
    }

    /// Build the connection options for SQLite.
    pub fn build_connect_options(&self, path: &str) -> Result<SqliteConnectOptions> {
        let options = SqliteConnectOptions::from_str(path)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(self.busy_timeout)
            .foreign_keys(true);

        Ok(options)
    }

    /// Build the pool options.
    pub fn build_pool_options(&self) -> SqlitePoolOptions {
        let mut opts = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout);

        if let Some(idle) = self.idle_timeout {
            opts = opts.idle_timeout(idle);
        }

        if let Some(lifetime) = self.max_lifetime {
            opts = opts.max_lifetime(lifetime);
        }

        opts
    }
}

/// Create a pool with custom configuration.
pub async fn create_pool_with_config(path: &str, config: PoolConfig) -> Result<super::DbPool> {
    // Create parent directories if they don't exist
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let options = config.build_connect_options(path)?;
    let pool_opts = config.build_pool_options();

    let pool = pool_opts.connect_with(options).await?;

    Ok(pool)
}

/// Health check for the database connection.
pub async fn health_check(pool: &super::DbPool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
