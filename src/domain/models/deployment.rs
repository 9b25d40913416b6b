use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::settings::{HostedSettings, Settings};
use crate::domain::errors::ConfigError;

/// Built-in deployment presets for the shipped front-ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    /// Signs development tokens for `Alice` against the `hellocdm` ledger
    HelloCdm,
    /// Hosted-only front-end for `Alice` and `Bob`
    DablHello,
}

impl Deployment {
    pub const ALL: [Self; 2] = [Self::HelloCdm, Self::DablHello];

    pub const fn name(self) -> &'static str {
        match self {
            Self::HelloCdm => "hellocdm",
            Self::DablHello => "dablhello",
        }
    }

    /// Settings the preset ships with
    pub fn settings(self) -> Settings {
        match self {
            Self::HelloCdm => {
                let party_names = vec!["Alice".to_string()];
                Settings {
                    is_local_dev: Some(true),
                    continuous_update: false,
                    ledger_id: "hellocdm".to_string(),
                    secret: "secret".to_string(),
                    hosted: HostedSettings::placeholders(&party_names),
                    party_names,
                    ..Settings::default()
                }
            }
            Self::DablHello => {
                let party_names = vec!["Alice".to_string(), "Bob".to_string()];
                Settings {
                    is_local_dev: None,
                    continuous_update: false,
                    ledger_id: "dablhello".to_string(),
                    hosted: HostedSettings::placeholders(&party_names),
                    party_names,
                    ..Settings::default()
                }
            }
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Deployment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hellocdm_preset() {
        let settings = Deployment::HelloCdm.settings();
        assert!(settings.signs_locally());
        assert_eq!(settings.ledger_id, "hellocdm");
        assert_eq!(settings.party_names, vec!["Alice"]);
        assert!(!settings.continuous_update);
        assert_eq!(settings.hosted.tokens.keys().collect::<Vec<_>>(), vec!["Alice"]);
    }

    #[test]
    fn test_dablhello_preset_never_declares_flag() {
        let settings = Deployment::DablHello.settings();
        assert_eq!(settings.is_local_dev, None);
        assert_eq!(settings.party_names, vec!["Alice", "Bob"]);
        assert_eq!(settings.hosted.parties.keys().collect::<Vec<_>>(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_parse_preset() {
        assert_eq!("hellocdm".parse::<Deployment>(), Ok(Deployment::HelloCdm));
        assert_eq!("DablHello".parse::<Deployment>(), Ok(Deployment::DablHello));
        assert_eq!(
            "sandbox".parse::<Deployment>(),
            Err(ConfigError::UnknownPreset("sandbox".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for preset in Deployment::ALL {
            assert_eq!(preset.to_string().parse::<Deployment>(), Ok(preset));
        }
    }
}
