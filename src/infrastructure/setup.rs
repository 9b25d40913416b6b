//! Project setup infrastructure
//!
//! Renders the commented `.ledger/config.yaml` written by `init`. The
//! hosted-service entries are the manual edit points: values are copied by
//! hand from the hosted ledger dashboard.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use super::config::PROJECT_CONFIG_PATH;
use crate::domain::models::Settings;

/// Paths used for project setup
#[derive(Debug, Clone)]
pub struct SetupPaths {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
}

impl SetupPaths {
    /// Setup paths rooted at `root`
    pub fn new(root: &Path) -> Self {
        let config_file = root.join(PROJECT_CONFIG_PATH);
        let config_dir = config_file
            .parent()
            .map_or_else(|| root.to_path_buf(), Path::to_path_buf);

        Self {
            config_dir,
            config_file,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.config_file.exists()
    }
}

/// Render the project config file for `settings`
pub fn render_config_template(settings: &Settings) -> String {
    let mut out = String::from(
        "# Ledger bootstrap configuration
# Override settings by editing this file, adding .ledger/local.yaml,
# or setting environment variables with the LEDGER_ prefix
#
# Example environment variables:
#   export LEDGER_IS_LOCAL_DEV=true
#   export LEDGER_CONTINUOUS_UPDATE=true
#   export LEDGER_LOGGING__LEVEL=debug

# Sign development tokens locally (true) or use hosted-service values (false).
# Leave unset to always use the hosted-service values.
",
    );

    match settings.is_local_dev {
        Some(flag) => {
            let _ = writeln!(out, "is_local_dev: {flag}");
        }
        None => out.push_str("# is_local_dev: false\n"),
    }

    let _ = write!(
        out,
        "
# Keep a live ledger connection in the front-end instead of one-shot queries
continuous_update: {continuous_update}

# Ledger id stamped into locally signed tokens
ledger_id: {ledger_id}

# Shared secret for local token signing. Development only.
secret: {secret}

# Party names known to this deployment
party_names:
",
        continuous_update = settings.continuous_update,
        ledger_id = quote(&settings.ledger_id),
        secret = quote(&settings.secret),
    );
    for name in &settings.party_names {
        let _ = writeln!(out, "  - {}", quote(name));
    }

    out.push_str(
        "
# Hosted-service values. Copy each party's token and party id from the
# hosted ledger dashboard before starting the front-end.
hosted:
  tokens:
",
    );
    push_placeholders(&mut out, settings, |name| settings.hosted.tokens.get(name));
    out.push_str("  parties:\n");
    push_placeholders(&mut out, settings, |name| settings.hosted.parties.get(name));

    let _ = write!(
        out,
        "
# Logging configuration
logging:
  # Log level: trace, debug, info, warn, error
  level: {level}

  # Log format: json, pretty
  format: {format}

  # Log file rotation: daily, hourly, never
  rotation: {rotation}
",
        level = quote(&settings.logging.level),
        format = quote(&settings.logging.format),
        rotation = quote(&settings.logging.rotation),
    );
    if let Some(ref dir) = settings.logging.log_dir {
        let _ = writeln!(out, "\n  # Directory for rolling log files\n  log_dir: {}", quote(dir));
    }

    out
}

fn push_placeholders<'a>(
    out: &mut String,
    settings: &'a Settings,
    value_for: impl Fn(&str) -> Option<&'a String>,
) {
    if settings.party_names.is_empty() {
        out.push_str("    {}\n");
        return;
    }
    for name in &settings.party_names {
        let value = value_for(name).map_or("", String::as_str);
        let _ = writeln!(out, "    {}: {}", quote(name), quote(value));
    }
}

/// JSON string literals are valid YAML scalars
fn quote(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
