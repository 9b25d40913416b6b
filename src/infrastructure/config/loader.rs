use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::value::{Uncased, UncasedStr};
use figment::Figment;
use std::collections::HashSet;
use std::path::Path;

use crate::domain::errors::ConfigError;
use crate::domain::models::Settings;

/// Project settings file, created by `init`
pub const PROJECT_CONFIG_PATH: &str = ".ledger/config.yaml";

/// Optional developer overrides, never committed
pub const LOCAL_OVERRIDES_PATH: &str = ".ledger/local.yaml";

/// Prefix for environment overrides; nested keys are split on `__`
pub const ENV_PREFIX: &str = "LEDGER_";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_LOG_FORMATS: [&str; 2] = ["json", "pretty"];
const VALID_LOG_ROTATIONS: [&str; 3] = ["daily", "hourly", "never"];

fn env_key(key: &UncasedStr) -> Uncased<'_> {
    let mut segments: Vec<String> = key.as_str().split('.').map(str::to_string).collect();
    let keep_case_from = match segments.as_slice() {
        [hosted, map, ..]
            if hosted.eq_ignore_ascii_case("hosted")
                && (map.eq_ignore_ascii_case("tokens") || map.eq_ignore_ascii_case("parties")) =>
        {
            2
        }
        _ => segments.len(),
    };
    for segment in segments.iter_mut().take(keep_case_from) {
        segment.make_ascii_lowercase();
    }
    Uncased::from(segments.join("."))
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from the current directory on top of the built-in defaults
    pub fn load() -> Result<Settings> {
        Self::load_with_base(Settings::default())
    }

    /// Load settings from the current directory on top of `base`
    pub fn load_with_base(base: Settings) -> Result<Settings> {
        Self::load_in(Path::new("."), base)
    }

    /// Load settings with hierarchical merging rooted at `root`
    ///
    /// Precedence (lowest to highest):
    /// 1. `base` (programmatic defaults or a deployment preset)
    /// 2. `.ledger/config.yaml` (project config, created by init)
    /// 3. `.ledger/local.yaml` (local overrides, optional)
    /// 4. Environment variables (`LEDGER_*` prefix, highest priority)
    pub fn load_in(root: &Path, base: Settings) -> Result<Settings> {
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(base))
            .merge(Yaml::file(root.join(PROJECT_CONFIG_PATH)))
            .merge(Yaml::file(root.join(LOCAL_OVERRIDES_PATH)))
            .merge(Self::env())
            .extract()
            .context("Failed to extract settings from figment")?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// `LEDGER_*` variables, nested on `__`
    ///
    /// Party names under `hosted.tokens` and `hosted.parties` keep their case
    /// so `LEDGER_HOSTED__TOKENS__Alice` lands on `Alice`; every other key
    /// segment is lowercased to match the field names.
    pub fn env() -> Env {
        Env::prefixed(ENV_PREFIX)
            .lowercase(false)
            .split("__")
            .map(env_key)
    }

    /// Load settings from a specific file on top of `base`
    pub fn load_from_file(path: impl AsRef<Path>, base: Settings) -> Result<Settings> {
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(base))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .with_context(|| format!("Failed to load settings from {}", path.as_ref().display()))?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
        if settings.signs_locally() {
            if settings.ledger_id.trim().is_empty() {
                return Err(ConfigError::EmptyLedgerId);
            }
            if settings.secret.is_empty() {
                return Err(ConfigError::EmptySecret);
            }
        }

        let mut seen = HashSet::new();
        for name in &settings.party_names {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyPartyName);
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicatePartyName(name.clone()));
            }
        }

        if !VALID_LOG_LEVELS.contains(&settings.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(settings.logging.level.clone()));
        }

        if !VALID_LOG_FORMATS.contains(&settings.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(settings.logging.format.clone()));
        }

        if !VALID_LOG_ROTATIONS.contains(&settings.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(settings.logging.rotation.clone()));
        }

        Ok(())
    }
}
