//! Middleware for ShareIt.
//!
//! - `sharer` - resolves the acting user from the `X-Sharer-User-Id` header

mod sharer;

pub use sharer::{require_sharer, SharerId};
