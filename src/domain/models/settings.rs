use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Provider settings the connection configuration is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Sign tokens locally (`true`) or emit hosted placeholders (`false` or unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_local_dev: Option<bool>,

    /// Passed through to the front-end untouched
    #[serde(default)]
    pub continuous_update: bool,

    /// Ledger id stamped into locally signed tokens
    #[serde(default = "default_ledger_id", deserialize_with = "lenient_string")]
    pub ledger_id: String,

    /// Shared development secret for local token signing
    #[serde(default = "default_secret", deserialize_with = "lenient_string")]
    pub secret: String,

    /// Party names known to the deployment
    #[serde(default = "default_party_names")]
    pub party_names: Vec<String>,

    /// Values copied from the hosted ledger dashboard
    #[serde(default)]
    pub hosted: HostedSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

fn default_ledger_id() -> String {
    "sandbox".to_string()
}

fn default_secret() -> String {
    "secret".to_string()
}

fn default_party_names() -> Vec<String> {
    vec!["Alice".to_string()]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            is_local_dev: None,
            continuous_update: false,
            ledger_id: default_ledger_id(),
            secret: default_secret(),
            party_names: default_party_names(),
            hosted: HostedSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Settings {
    /// Local development tokens are signed only when the flag is declared and true
    pub fn signs_locally(&self) -> bool {
        self.is_local_dev == Some(true)
    }
}

/// Hosted-service placeholders, keyed by party name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HostedSettings {
    #[serde(default, deserialize_with = "lenient_string_map")]
    pub tokens: BTreeMap<String, String>,

    #[serde(default, deserialize_with = "lenient_string_map")]
    pub parties: BTreeMap<String, String>,
}

impl HostedSettings {
    /// One empty placeholder per party in both maps
    pub fn placeholders<S: AsRef<str>>(party_names: &[S]) -> Self {
        let empty: BTreeMap<String, String> = party_names
            .iter()
            .map(|name| (name.as_ref().to_string(), String::new()))
            .collect();
        Self {
            tokens: empty.clone(),
            parties: empty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingSettings {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; stderr only when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,

    /// Log file rotation: daily, hourly, never
    #[serde(default = "default_log_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_log_rotation(),
        }
    }
}

/// Accepts scalars where a string is expected
///
/// Environment values and unquoted YAML arrive typed, so `LEDGER_SECRET=1234`
/// or `Alice: 1220` would otherwise fail to load.
struct LenientString;

impl Visitor<'_> for LenientString {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    deserializer.deserialize_any(LenientString)
}

#[derive(Deserialize)]
#[serde(transparent)]
struct LenientValue(#[serde(deserialize_with = "lenient_string")] String);

fn lenient_string_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    let values = BTreeMap::<String, LenientValue>::deserialize(deserializer)?;
    Ok(values.into_iter().map(|(key, value)| (key, value.0)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.is_local_dev, None);
        assert!(!settings.continuous_update);
        assert!(!settings.signs_locally());
        assert_eq!(settings.party_names, vec!["Alice"]);
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let settings: Settings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_only_true_flag_signs_locally() {
        let mut settings = Settings::default();
        settings.is_local_dev = Some(false);
        assert!(!settings.signs_locally());
        settings.is_local_dev = Some(true);
        assert!(settings.signs_locally());
    }

    #[test]
    fn test_numeric_values_load_as_strings() {
        let yaml = "secret: 12345678\nledger_id: 42\nhosted:\n  parties:\n    Alice: 1220\n  tokens:\n    Alice: true\n";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.secret, "12345678");
        assert_eq!(settings.ledger_id, "42");
        assert_eq!(settings.hosted.parties["Alice"], "1220");
        assert_eq!(settings.hosted.tokens["Alice"], "true");
    }

    #[test]
    fn test_lenient_fields_still_reject_structures() {
        assert!(serde_yaml::from_str::<Settings>("secret: [a, b]\n").is_err());
    }

    #[test]
    fn test_placeholders() {
        let hosted = HostedSettings::placeholders(&["Alice", "Bob"]);
        assert_eq!(hosted.tokens.len(), 2);
        assert_eq!(hosted.tokens, hosted.parties);
        assert!(hosted.tokens.values().all(String::is_empty));
    }
}
