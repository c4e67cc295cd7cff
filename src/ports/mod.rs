// Ports - Interface definitions (contracts)

use std::path::Path;

use async_trait::async_trait;

use crate::domain::FetchedMedia;
use crate::error::SplitResult;

/// Port for resolving a source URL to a local media file
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Download the video behind `url` and report its local path and
    /// duration in whole seconds.
    ///
    /// Fails with `InvalidUrl`, `Unavailable`, `Private` or
    /// `NoCompatibleStream`; none of these are retried by the pipeline.
    async fn fetch(&self, url: &str) -> SplitResult<FetchedMedia>;
}

/// Port for materializing one segment's time range as an output file
#[async_trait]
pub trait SegmentEncoder: Send + Sync {
    /// Extract `[start, end)` seconds of `source` into `dest`.
    ///
    /// Fails with `Encode` on any underlying processing failure; a failed
    /// segment aborts the remainder of the batch.
    async fn encode(&self, source: &Path, start: u64, end: u64, dest: &Path) -> SplitResult<()>;
}
