//! Infrastructure layer module
//!
//! - Configuration loading (figment)
//! - JWT token signing
//! - Logging infrastructure
//! - Project setup templates
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
pub mod setup;
pub mod tokens;
