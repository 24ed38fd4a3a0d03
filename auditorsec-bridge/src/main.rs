use auditorsec_bridge::app::run_dashboard;
use auditorsec_bridge::cli::{Cli, Command};
use auditorsec_bridge::commands::{ask_template, run_ask, run_format, run_tracks};
use auditorsec_bridge::config::{default_log_path, Config};
use auditorsec_bridge::logging::{self, LogTarget};

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command();

    // The dashboard owns the terminal; everything else may log to stderr.
    let target = match command {
        Command::Dashboard => default_log_path()
            .map(LogTarget::File)
            .unwrap_or(LogTarget::Discard),
        _ => LogTarget::Stderr,
    };
    logging::init(target)?;

    let config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_model_override(cli.model.clone());

    tracing::info!(model = %config.model, "=== AuditorSEC Command starting ===");

    let color = std::io::stdout().is_terminal();

    match command {
        Command::Dashboard => run_dashboard(&config).await,
        Command::Tracks { json } => run_tracks(json),
        Command::Ask {
            track,
            mitigation,
            query,
        } => run_ask(&config, &track, ask_template(mitigation, &query), color).await,
        Command::Format { path, json } => run_format(path.as_deref(), json, color),
    }
}
