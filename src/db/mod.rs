//! Database layer for ShareIt.
//!
//! Provides SQLite connection pooling and query modules
//! for all domain entities.

mod bookings;
mod comments;
mod items;
mod pool;
mod requests;
mod users;

// Re-export all query modules
pub use bookings::*;
pub use comments::*;
pub use items::*;
pub use pool::{create_pool_with_config, health_check, PoolConfig};
pub use requests::*;
pub use users::*;

use crate::Result;
use tracing::info;

/// Type alias for the SQLite connection pool.
pub type DbPool = sqlx::SqlitePool;

/// Initialize the database connection pool.
///
/// Creates parent directories if needed. `:memory:` gets a single pinned
/// connection so the schema outlives the first query.
pub async fn init_pool(path: &str) -> Result<DbPool> {
    let config = if path == ":memory:" {
        PoolConfig::in_memory()
    } else {
        PoolConfig::default()
    };
    let pool = create_pool_with_config(path, config).await?;

    info!("Database pool initialized: {}", path);

    Ok(pool)
}

/// Initialize the database schema.
///
/// Applies the complete schema from schema.sql. Uses IF NOT EXISTS
/// clauses so it's safe to run multiple times.
pub async fn initialize_schema(pool: &DbPool) -> Result<()> {
    let schema = include_str!("../../schema.sql");

    info!("Initializing database schema");

    // Split by semicolons and execute each statement
    for statement in schema.split(';') {
        // Strip comment lines, keeping only actual SQL
        let clean_stmt: String = statement
            .lines()
            .filter(|line| !line.trim().starts_with("--"))
            .collect::<Vec<_>>()
            .join("\n");
        let clean_stmt = clean_stmt.trim();
        if clean_stmt.is_empty() {
            continue;
        }
        sqlx::query(clean_stmt).execute(pool).await?;
    }

    info!("Database schema initialized successfully");

    Ok(())
}

/// Fresh in-memory database with the schema applied.
#[cfg(test)]
pub(crate) async fn test_pool() -> DbPool {
    let pool = init_pool(":memory:").await.unwrap();
    initialize_schema(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_initialization() {
        let pool = test_pool().await;

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name"
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        let table_names: Vec<&str> = tables.iter().map(|(n,)| n.as_str()).collect();
        assert_eq!(
            table_names,
            vec!["bookings", "comments", "item_requests", "items", "users"]
        );
    }

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let pool = test_pool().await;
        initialize_schema(&pool).await.unwrap();
    }
}
