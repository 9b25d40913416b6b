//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty formatting on stderr
//! - Optional rolling log files
//! - Secret scrubbing of every written event

pub mod config;
pub mod logger;
pub mod secret_scrubbing;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::{debug, error, info, instrument, trace, warn, LoggerImpl};
pub use secret_scrubbing::{ScrubbingMakeWriter, SecretScrubber};
