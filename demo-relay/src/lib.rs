//! Demo Relay - forwards Faceit demo downloads to Leetify.
//!
//! One binary, `demo-relay`, receives Faceit "demo ready" webhooks and
//! relays each demo in three sequential calls.
//!
//! ## Architecture
//!
//! ```text
//! Faceit webhook → Web Server → Faceit (download URL) → Leetify (login, submit)
//! ```

pub mod config;
pub mod error;
pub mod platform;
pub mod relay;
pub mod web;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use error::{RelayError, Service};
pub use platform::{FaceitClient, LeetifyClient};
pub use relay::Relay;
pub use web::{router, AppState};
