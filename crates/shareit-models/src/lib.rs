//! Wire types for ShareIt.
//!
//! Request and response bodies shared by the server and the gateway, the
//! query-parameter types both services accept, and the explicit validation
//! functions run at each service boundary.
//!
//! This crate can be used with or without sqlx support:
//! - Default: No database dependencies, pure data structures
//! - With `sqlx` feature: `BookingStatus` can be bound and decoded as a column

mod booking;
mod error;
mod item;
mod page;
mod patch;
mod request;
pub mod time;
mod user;
pub mod validate;

pub use booking::*;
pub use error::ValidationError;
pub use item::*;
pub use page::*;
pub use patch::Patch;
pub use request::*;
pub use user::*;

/// Header carrying the acting user's numeric id.
pub const SHARER_HEADER: &str = "X-Sharer-User-Id";

/// Identifier type of every persisted record.
pub type Id = i64;
