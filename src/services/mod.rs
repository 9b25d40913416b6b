pub mod config_check;
pub mod config_provider;

pub use config_check::{check, Finding, Severity};
pub use config_provider::ConfigProvider;
