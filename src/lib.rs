//! reelsplit - download-and-segment pipeline
//!
//! Fetches a remote video by URL, splits it into fixed-duration segments
//! and writes each segment to disk, reporting progress to the foreground
//! through an ordered channel while the pipeline runs on a background task.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod planner;
pub mod ports;
pub mod progress;

// Re-export commonly used types
pub use config::Config;
pub use domain::{FetchedMedia, Job};
pub use error::{SplitError, SplitResult};
pub use pipeline::{PipelineHandle, PipelineWorker};
pub use planner::Segment;
pub use progress::ProgressEvent;
