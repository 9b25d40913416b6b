//! Implementation of the `ledger-bootstrap init` command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tokio::fs;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Settings;
use crate::infrastructure::setup::{render_config_template, SetupPaths};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing .ledger/config.yaml
    #[arg(long, short)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub config_file: PathBuf,
    pub local_dev: Option<bool>,
    pub parties: Vec<String>,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![self.message.clone()];
        if self.success {
            lines.push(format!("\nWrote {}", self.config_file.display()));
            lines.push(format!("Parties: {}", self.parties.join(", ")));
            if self.local_dev != Some(true) {
                lines.push(
                    "\nCopy each party's token and party id from the hosted ledger dashboard into the hosted: section."
                        .to_string(),
                );
            }
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: InitArgs, settings: &Settings, json_mode: bool) -> Result<()> {
    let target_path = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .context("Failed to get current directory")?
            .join(&args.path)
    };
    let paths = SetupPaths::new(&target_path);

    if paths.is_initialized() && !args.force {
        let output_data = InitOutput {
            success: false,
            message: "Project already initialized. Use --force to overwrite.".to_string(),
            config_file: paths.config_file,
            local_dev: settings.is_local_dev,
            parties: settings.party_names.clone(),
        };
        output(&output_data, json_mode);
        return Ok(());
    }

    fs::create_dir_all(&paths.config_dir)
        .await
        .with_context(|| format!("Failed to create {}", paths.config_dir.display()))?;
    fs::write(&paths.config_file, render_config_template(settings))
        .await
        .with_context(|| format!("Failed to write {}", paths.config_file.display()))?;

    tracing::info!(path = %paths.config_file.display(), force = args.force, "wrote project config");

    let output_data = InitOutput {
        success: true,
        message: if args.force {
            "Project reinitialized successfully.".to_string()
        } else {
            "Project initialized successfully.".to_string()
        },
        config_file: paths.config_file,
        local_dev: settings.is_local_dev,
        parties: settings.party_names.clone(),
    };

    output(&output_data, json_mode);
    Ok(())
}
