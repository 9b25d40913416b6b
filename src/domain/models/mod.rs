pub mod claims;
pub mod connection;
pub mod deployment;
pub mod settings;

pub use claims::LedgerClaims;
pub use connection::ConnectionConfig;
pub use deployment::Deployment;
pub use settings::{HostedSettings, LoggingSettings, Settings};
