//! Command-line interface definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

pub use args::SplitArgs;
pub use commands::execute_split_command;

/// reelsplit - download a video and split it into 60-second segments
#[derive(Parser, Debug)]
#[command(name = "reelsplit", version, about)]
pub struct Cli {
    /// Path to a TOML config file (default: ./reelsplit.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download a video and write its segments to the output directory
    Split(SplitArgs),
}
