//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - Preset or programmatic defaults
//! - YAML file loading
//! - Environment variable overrides
//! - Settings validation

pub mod loader;

pub use crate::domain::errors::ConfigError;
pub use loader::{ConfigLoader, ENV_PREFIX, LOCAL_OVERRIDES_PATH, PROJECT_CONFIG_PATH};
