//! Ledger Bootstrap - connection configuration for ledger front-ends
//!
//! Builds the record example front-end applications bootstrap from: party
//! identifiers, per-party access tokens and the `continuousUpdate` flag.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the connection record, token claims, settings and ports
//! - **Service Layer** (`services`): the configuration provider and pre-flight checks
//! - **Infrastructure Layer** (`infrastructure`): figment settings, JWT signing, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use ledger_bootstrap::{ConfigLoader, ConfigProvider, Deployment};
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = ConfigLoader::load_with_base(Deployment::HelloCdm.settings())?;
//!     let config = ConfigProvider::from_settings(settings).init_global()?;
//!     println!("{}", serde_json::to_string(config)?);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    ConnectionConfig, Deployment, HostedSettings, LedgerClaims, LoggingSettings, Settings,
};
pub use domain::ports::TokenSigner;
pub use domain::{ConfigError, TokenError};
pub use infrastructure::config::ConfigLoader;
pub use infrastructure::logging;
pub use infrastructure::tokens::JwtTokenSigner;
pub use services::{ConfigProvider, Finding, Severity};
