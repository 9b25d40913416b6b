//! Implementation of the `ledger-bootstrap inspect` command.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{LedgerClaims, Settings};
use crate::infrastructure::tokens::JwtTokenSigner;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Signed token, as found in the `tokens` map
    pub token: String,

    /// Secret the token was signed with (defaults to the configured secret)
    #[arg(short, long, env = "LEDGER_INSPECT_SECRET", hide_env_values = true)]
    pub secret: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct InspectOutput {
    pub claims: LedgerClaims,
    pub issued_at: Option<DateTime<Utc>>,
}

impl CommandOutput for InspectOutput {
    fn to_human(&self) -> String {
        let issued = self
            .issued_at
            .map_or_else(|| "-".to_string(), |at| at.to_rfc3339());
        [
            format!("Ledger ID:      {}", self.claims.ledger_id),
            format!("Application ID: {}", self.claims.application_id),
            format!("Party:          {}", self.claims.party),
            format!("Issued at:      {issued}"),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn decode(args: &InspectArgs, settings: &Settings) -> Result<InspectOutput> {
    let secret = args.secret.as_deref().unwrap_or(&settings.secret);
    let claims = JwtTokenSigner::new(secret)
        .decode(args.token.trim())
        .context("Token was not signed with this secret or is malformed")?;

    Ok(InspectOutput {
        issued_at: claims.issued_at(),
        claims,
    })
}

pub fn execute(args: InspectArgs, settings: &Settings, json_mode: bool) -> Result<()> {
    let output_data = decode(&args, settings)?;
    output(&output_data, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Deployment;
    use crate::services::ConfigProvider;

    #[test]
    fn test_decodes_provider_token() {
        let settings = Deployment::HelloCdm.settings();
        let config = ConfigProvider::from_settings(settings.clone()).load().unwrap();
        let args = InspectArgs {
            token: config.tokens["Alice"].clone(),
            secret: None,
        };

        let out = decode(&args, &settings).unwrap();
        assert_eq!(out.claims.ledger_id, "hellocdm");
        assert_eq!(out.claims.party, "Alice");
        assert!(out.issued_at.is_some());
        assert!(out.to_human().contains("Party:          Alice"));
    }

    #[test]
    fn test_wrong_secret_is_an_error() {
        let settings = Deployment::HelloCdm.settings();
        let config = ConfigProvider::from_settings(settings.clone()).load().unwrap();
        let args = InspectArgs {
            token: config.tokens["Alice"].clone(),
            secret: Some("other".to_string()),
        };

        assert!(decode(&args, &settings).is_err());
    }
}
