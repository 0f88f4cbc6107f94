//! Scoreboard - Application Entry Point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scoreboard::{
    cli::Cli,
    config::{Config, LogFormat},
    ContestStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Usage errors and --help exit here, before any configuration is read
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize tracing; logs go to stderr so stdout stays pure JSON
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    let store = ContestStore::new(config.data.path.clone());
    tracing::debug!(data = %store.root().display(), command = ?cli.command, "Running command");

    let result = cli.command.execute(&store, &config).await;

    match result {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::warn!(code = e.error_code(), "Command failed: {}", e);
            eprintln!("{}", serde_json::to_string_pretty(&e.to_response())?);
            Ok(ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1)))
        }
    }
}
