//! Download-and-segment pipeline worker
//!
//! Orchestrates fetch, segment planning and sequential segment encodes on a
//! dedicated background task, reporting progress to the foreground through
//! the progress channel. Every failure is handled here; nothing crosses the
//! channel boundary except `ProgressEvent`s.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::domain::{segment_file_name, Job};
use crate::planner::{self, DEFAULT_SEGMENT_SECONDS};
use crate::ports::{SegmentEncoder, SourceFetcher};
use crate::progress::{self, ProgressEvent, ProgressReceiver, ProgressSender};

/// Owned handle to a running pipeline task.
///
/// One pipeline may be in flight at a time; submitting a second job while
/// one is running is unsupported and requires a fresh worker. The handle
/// exists so a single-in-flight guard or cancellation can be added later
/// without reshaping the API.
pub struct PipelineHandle {
    join: JoinHandle<()>,
}

impl PipelineHandle {
    /// True once the background task has exited
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait for the background task to finish.
    ///
    /// The task never panics in normal operation; a panic here indicates a
    /// bug, not a job failure (job failures arrive as `Failed` events).
    pub async fn join(self) {
        if let Err(e) = self.join.await {
            error!("pipeline task panicked: {}", e);
        }
    }
}

/// Background worker for one download-and-segment job
pub struct PipelineWorker {
    fetcher: Arc<dyn SourceFetcher>,
    encoder: Arc<dyn SegmentEncoder>,
    segment_seconds: u64,
}

impl PipelineWorker {
    /// Create a worker with the default 60-second segment window
    pub fn new(fetcher: Arc<dyn SourceFetcher>, encoder: Arc<dyn SegmentEncoder>) -> Self {
        Self {
            fetcher,
            encoder,
            segment_seconds: DEFAULT_SEGMENT_SECONDS,
        }
    }

    /// Override the segment window length
    pub fn with_segment_seconds(mut self, segment_seconds: u64) -> Self {
        self.segment_seconds = segment_seconds;
        self
    }

    /// Start the job on a dedicated task and return the handle plus the
    /// receiving end of the progress channel.
    pub fn spawn(self, job: Job) -> (PipelineHandle, ProgressReceiver) {
        let (tx, rx) = progress::channel();
        let join = tokio::spawn(async move {
            self.run(job, tx).await;
        });
        (PipelineHandle { join }, rx)
    }

    async fn run(self, job: Job, tx: ProgressSender) {
        if self.segment_seconds == 0 {
            let detail = "segment window must be positive".to_string();
            error!("{}", detail);
            emit(&tx, ProgressEvent::Failed { reason: detail });
            return;
        }

        info!("starting pipeline for {}", job.url);
        emit(&tx, ProgressEvent::Status("Downloading video...".to_string()));

        if let Err(e) = tokio::fs::create_dir_all(&job.output_dir).await {
            let detail = format!(
                "could not create output directory {}: {}",
                job.output_dir.display(),
                e
            );
            error!("{}", detail);
            emit(&tx, ProgressEvent::Status("Ready".to_string()));
            emit(&tx, ProgressEvent::Failed { reason: detail });
            return;
        }

        let media = match self.fetcher.fetch(&job.url).await {
            Ok(media) => media,
            Err(e) => {
                if !e.is_fetch_error() {
                    error!("fetch failed unexpectedly: {}", e);
                }
                emit(&tx, ProgressEvent::Status("Ready".to_string()));
                emit(&tx, ProgressEvent::Failed { reason: e.to_string() });
                return;
            }
        };

        info!(
            "downloaded {} ({} s)",
            media.path.display(),
            media.duration_seconds
        );
        emit(
            &tx,
            ProgressEvent::Status("Download complete. Trimming video...".to_string()),
        );

        let segments = planner::plan_with(media.duration_seconds, self.segment_seconds);
        let total = segments.len();

        for segment in &segments {
            // Progress is reported when a segment is entered, not when it
            // finishes; the final SegmentProgress and Done still only land
            // after the last encode genuinely completes.
            emit(
                &tx,
                ProgressEvent::SegmentProgress {
                    completed: segment.index,
                    total,
                },
            );
            emit(
                &tx,
                ProgressEvent::Status(format!(
                    "Writing clip from {} to {}...",
                    segment.start, segment.end
                )),
            );

            let dest = job
                .output_dir
                .join(segment_file_name(segment.index, &media.path));

            if let Err(e) = self
                .encoder
                .encode(&media.path, segment.start, segment.end, &dest)
                .await
            {
                let detail = format!(
                    "Error writing clip from {} to {}: {}",
                    segment.start, segment.end, e
                );
                error!("{}", detail);
                emit(&tx, ProgressEvent::Failed { reason: detail });
                return;
            }
        }

        info!("all {} segments written to {}", total, job.output_dir.display());
        emit(&tx, ProgressEvent::Done { total });
    }
}

/// Push an event; a closed channel means the consumer is gone, and the
/// worker has nobody left to report to.
fn emit(tx: &ProgressSender, event: ProgressEvent) {
    let _ = tx.send(event);
}
