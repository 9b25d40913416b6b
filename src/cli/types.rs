//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::{check::CheckArgs, init::InitArgs, inspect::InspectArgs, show::ShowArgs};
use crate::domain::models::{Deployment, Settings};
use crate::infrastructure::config::ConfigLoader;

#[derive(Parser, Debug)]
#[command(name = "ledger-bootstrap")]
#[command(about = "Connection configuration for ledger front-end applications", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Deployment preset used as the base settings (hellocdm, dablhello)
    #[arg(short, long, global = true, env = "LEDGER_PRESET")]
    pub preset: Option<Deployment>,

    /// Settings file to load instead of the project .ledger/ files
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write .ledger/config.yaml for a deployment
    Init(InitArgs),

    /// Build the connection config and print or export it
    Show(ShowArgs),

    /// Decode a locally signed token and print its claims
    Inspect(InspectArgs),

    /// Report empty placeholders and party mismatches
    Check(CheckArgs),
}

impl Cli {
    /// Preset settings, or the built-in defaults
    pub fn base_settings(&self) -> Settings {
        self.preset.map(Deployment::settings).unwrap_or_default()
    }

    /// Settings for this invocation, layered on top of [`Cli::base_settings`]
    pub fn load_settings(&self) -> Result<Settings> {
        match self.config {
            Some(ref path) => ConfigLoader::load_from_file(path, self.base_settings()),
            None => ConfigLoader::load_with_base(self.base_settings()),
        }
    }
}
