//! Implementation of the `ledger-bootstrap check` command.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::Settings;
use crate::services::{check, ConfigProvider, Finding, Severity};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Exit with an error when any warning is reported
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct CheckOutput {
    pub local_dev: bool,
    pub parties: usize,
    pub findings: Vec<Finding>,
}

impl CheckOutput {
    pub fn warnings(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mode = if self.local_dev { "local development" } else { "hosted service" };
        if self.findings.is_empty() {
            return format!("No issues found ({mode}, {} parties).", self.parties);
        }
        format!(
            "{} warning(s) ({mode}, {} parties)\n\n{}",
            self.warnings(),
            self.parties,
            TableFormatter::new().format_findings(&self.findings)
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn run(settings: &Settings) -> Result<CheckOutput> {
    let config = ConfigProvider::from_settings(settings.clone())
        .load()
        .context("Failed to build connection config")?;

    Ok(CheckOutput {
        local_dev: config.is_local(),
        parties: settings.party_names.len(),
        findings: check(settings, &config),
    })
}

pub fn execute(args: CheckArgs, settings: &Settings, json_mode: bool) -> Result<()> {
    let output_data = run(settings)?;
    output(&output_data, json_mode);

    if args.strict && output_data.warnings() > 0 {
        anyhow::bail!("{} warning(s) reported", output_data.warnings());
    }
    Ok(())
}
