//! ledger-bootstrap CLI entry point.

use clap::Parser;

use ledger_bootstrap::cli::{commands, handle_error, Cli, Commands};
use ledger_bootstrap::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // init writes the preset; every other command reads the layered settings
    let settings = match cli.command {
        Commands::Init(_) => Ok(cli.base_settings()),
        _ => cli.load_settings(),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&LogConfig::from(&settings.logging)) {
        Ok(logger) => logger,
        Err(err) => handle_error(err, cli.json),
    };
    tracing::debug!(
        local_dev = ?settings.is_local_dev,
        parties = settings.party_names.len(),
        preset = ?cli.preset,
        "settings loaded"
    );

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args, &settings, cli.json).await,
        Commands::Show(args) => commands::show::execute(args, settings, cli.json).await,
        Commands::Inspect(args) => commands::inspect::execute(args, &settings, cli.json),
        Commands::Check(args) => commands::check::execute(args, &settings, cli.json),
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
