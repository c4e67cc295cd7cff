//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the split command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Source video URL
    #[arg(short, long)]
    pub url: String,

    /// Output directory (default: from config)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Segment window length in seconds (default: 60)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub segment_seconds: Option<u64>,
}
