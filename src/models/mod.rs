//! Mapping from database records to wire types.
//!
//! Response bodies are defined in `shareit_models`; this module turns the
//! records returned by `db` into them.

mod dto;

pub use dto::*;

use chrono::NaiveDateTime;

/// Current local wall-clock time.
///
/// Booking windows and creation stamps are naive local datetimes, so every
/// "now" comparison in the server goes through here.
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
