//! Domain layer for the ledger bootstrap provider
//!
//! This module contains the configuration record, token claims, provider
//! settings and the ports infrastructure adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{ConfigError, TokenError};
