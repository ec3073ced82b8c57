//! Application state for ShareIt.
//!
//! Contains the shared state that is passed to all handlers.

use crate::db::{self, DbPool, PoolConfig};
use crate::services::{BookingService, ItemRequestService, ItemService, UserService};
use crate::{config, Result};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DbPool,
    /// User directory.
    pub users: UserService,
    /// Item catalog and comments.
    pub items: ItemService,
    /// Item-request board.
    pub requests: ItemRequestService,
    /// Booking ledger.
    pub bookings: BookingService,
}

impl AppState {
    /// Create a new application state from the global configuration.
    pub async fn new() -> Result<Self> {
        let config = config::config();

        let db = if config.database.path == ":memory:" {
            db::init_pool(&config.database.path).await?
        } else {
            let pool_config = PoolConfig {
                max_connections: config.database.max_connections,
                ..PoolConfig::default()
            };
            db::create_pool_with_config(&config.database.path, pool_config).await?
        };

        db::initialize_schema(&db).await?;

        Ok(Self::with_pool(db))
    }

    /// Build the state around an existing, initialized pool.
    pub fn with_pool(db: DbPool) -> Self {
        Self {
            users: UserService::new(db.clone()),
            items: ItemService::new(db.clone()),
            requests: ItemRequestService::new(db.clone()),
            bookings: BookingService::new(db.clone()),
            db,
        }
    }
}
