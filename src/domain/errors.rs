//! Domain errors for the ledger bootstrap provider.

use thiserror::Error;

/// Settings validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Ledger id cannot be empty when signing local development tokens")]
    EmptyLedgerId,

    #[error("Signing secret cannot be empty when signing local development tokens")]
    EmptySecret,

    #[error("Party names cannot be empty strings")]
    EmptyPartyName,

    #[error("Duplicate party name: {0}")]
    DuplicatePartyName(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),

    #[error("Unknown deployment preset: {0}. Must be one of: hellocdm, dablhello")]
    UnknownPreset(String),
}

/// Token signing and decoding errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Signing secret is empty")]
    EmptySecret,

    #[error("Failed to sign token for party {party}: {reason}")]
    Signing { party: String, reason: String },

    #[error("Failed to decode token: {0}")]
    Decoding(String),
}
