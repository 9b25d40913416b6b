//! Implementation of the `ledger-bootstrap show` command.
//!
//! With `--json` or `--output` the record is emitted in the exact shape the
//! front-end bootstrap code imports.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tokio::fs;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{ConnectionConfig, Settings};
use crate::services::ConfigProvider;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Write the JSON record to this file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print tokens in the human table instead of hiding them
    #[arg(short, long)]
    pub reveal: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct ShowOutput {
    pub config: ConnectionConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_to: Option<PathBuf>,
    #[serde(skip)]
    pub reveal: bool,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        if let Some(ref path) = self.written_to {
            return format!(
                "Wrote connection config for {} part{} to {}",
                self.config.party_names().len(),
                if self.config.party_names().len() == 1 { "y" } else { "ies" },
                path.display()
            );
        }

        let mode = if self.config.is_local() {
            "local development (tokens signed at load)"
        } else {
            "hosted service"
        };
        let lines = [
            format!("Mode: {mode}"),
            format!("Continuous update: {}", self.config.continuous_update),
            String::new(),
            TableFormatter::new().format_parties(&self.config, self.reveal),
        ];
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        match self.written_to {
            Some(_) => serde_json::to_value(self).unwrap_or_default(),
            None => serde_json::to_value(&self.config).unwrap_or_default(),
        }
    }
}

/// Serialized export consumed by front-end bootstrap code
pub fn export_json(config: &ConnectionConfig) -> Result<String> {
    let mut json = serde_json::to_string_pretty(config).context("Failed to serialize connection config")?;
    json.push('\n');
    Ok(json)
}

pub async fn execute(args: ShowArgs, settings: Settings, json_mode: bool) -> Result<()> {
    let provider = ConfigProvider::from_settings(settings);
    let config = provider
        .init_global()
        .context("Failed to build connection config")?;

    if let Some(ref path) = args.output {
        fs::write(path, export_json(config)?)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "exported connection config");
    }

    let output_data = ShowOutput {
        config: config.clone(),
        written_to: args.output,
        reveal: args.reveal,
    };
    output(&output_data, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Deployment;

    #[test]
    fn test_json_is_the_bare_record() {
        let config = ConfigProvider::from_settings(Deployment::DablHello.settings())
            .load()
            .unwrap();
        let out = ShowOutput {
            config: config.clone(),
            written_to: None,
            reveal: false,
        };
        assert_eq!(out.to_json(), serde_json::to_value(&config).unwrap());
    }

    #[test]
    fn test_export_json_matches_front_end_shape() {
        let config = ConfigProvider::from_settings(Deployment::DablHello.settings())
            .load()
            .unwrap();
        let json = export_json(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["continuousUpdate"], false);
        assert!(value.get("isLocalDev").is_none());
        assert_eq!(value["tokens"], serde_json::json!({"Alice": "", "Bob": ""}));
        assert_eq!(value["parties"], serde_json::json!({"Alice": "", "Bob": ""}));
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_human_summary_for_written_export() {
        let config = ConfigProvider::from_settings(Deployment::HelloCdm.settings())
            .load()
            .unwrap();
        let out = ShowOutput {
            config,
            written_to: Some(PathBuf::from("config.json")),
            reveal: false,
        };
        assert_eq!(out.to_human(), "Wrote connection config for 1 party to config.json");
    }
}
