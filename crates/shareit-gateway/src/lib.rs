//! ShareIt gateway
//!
//! Validates inbound requests and relays the valid ones to the ShareIt
//! server, returning the server's answer verbatim.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod state;

pub use client::ServerClient;
pub use config::config;
pub use error::{Error, Result};
pub use state::GatewayState;
