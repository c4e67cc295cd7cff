//! reelsplit CLI
//!
//! # Usage
//!
//! ```bash
//! reelsplit split --url "https://www.youtube.com/watch?v=..." --output-dir reels
//! ```

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use reelsplit::cli::{execute_split_command, Cli, Commands};
use reelsplit::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    init_logging(&config.log_file)?;
    info!("Starting reelsplit");

    match cli.command {
        Commands::Split(args) => execute_split_command(args, config).await?,
    }

    info!("reelsplit completed");
    Ok(())
}

/// Log to stderr plus an append-only diagnostics file
fn init_logging(log_file: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();

    Ok(())
}
