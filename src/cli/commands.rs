//! Command execution: wires the adapters, spawns the pipeline and runs the
//! foreground progress loop.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use tracing::info;

use crate::adapters::{FfmpegSegmentEncoder, SystemFfmpeg, SystemYtDlp, YtDlpFetcher};
use crate::cli::SplitArgs;
use crate::config::Config;
use crate::domain::Job;
use crate::pipeline::PipelineWorker;
use crate::progress::{self, ProgressEvent, POLL_INTERVAL_MS};

/// Execute the split command: validate the job, run the pipeline in the
/// background and render its progress until a terminal event arrives.
pub async fn execute_split_command(args: SplitArgs, mut config: Config) -> Result<()> {
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    if let Some(seconds) = args.segment_seconds {
        config.segment_seconds = seconds;
    }

    let job = Job::new(&args.url, config.output_dir.clone())?;
    info!("submitting job for {}", job.url);

    let fetcher = YtDlpFetcher::new(
        SystemYtDlp::new(config.ytdlp_bin.clone()),
        SystemFfmpeg::new(config.ffmpeg_bin.clone(), config.ffprobe_bin.clone()),
        config.output_dir.clone(),
    );
    let encoder = FfmpegSegmentEncoder::new(SystemFfmpeg::new(
        config.ffmpeg_bin.clone(),
        config.ffprobe_bin.clone(),
    ));

    let worker = PipelineWorker::new(Arc::new(fetcher), Arc::new(encoder))
        .with_segment_seconds(config.segment_seconds);
    let (handle, mut receiver) = worker.spawn(job);

    // Fixed-interval poll loop: drain everything queued on each tick and
    // render the last terminal event if one arrived alongside progress.
    let mut interval = tokio::time::interval(Duration::from_millis(POLL_INTERVAL_MS));
    let outcome = loop {
        interval.tick().await;

        if let Some(event) = process_tick(progress::drain(&mut receiver)) {
            break Some(event);
        }
        // The worker always emits a terminal event before exiting; this
        // guards against the task dying without one (e.g. a panic).
        if handle.is_finished() && receiver.is_empty() {
            break None;
        }
    };

    handle.join().await;

    match outcome {
        Some(ProgressEvent::Done { total }) => {
            println!(
                "Success: video downloaded and split into {} segment(s) in {}",
                total,
                config.output_dir.display()
            );
            Ok(())
        }
        Some(ProgressEvent::Failed { reason }) => bail!("{}", reason),
        _ => bail!("pipeline ended without reporting a result"),
    }
}

/// Handle one tick's worth of drained events: render each in order and
/// return the terminal event to act on. When progress and terminal events
/// arrive in the same tick, the last terminal one wins.
fn process_tick(events: Vec<ProgressEvent>) -> Option<ProgressEvent> {
    let mut terminal = None;
    for event in events {
        render(&event);
        if event.is_terminal() {
            terminal = Some(event);
        }
    }
    terminal
}

/// Render one drained event to the terminal
fn render(event: &ProgressEvent) {
    match event {
        ProgressEvent::Status(text) => println!("Status: {}", text),
        ProgressEvent::SegmentProgress { completed, total } => {
            println!("Progress: {}/{}", completed, total)
        }
        ProgressEvent::Done { .. } | ProgressEvent::Failed { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_with_no_terminal_event_yields_none() {
        let events = vec![
            ProgressEvent::Status("Downloading video...".to_string()),
            ProgressEvent::SegmentProgress { completed: 1, total: 3 },
        ];
        assert_eq!(process_tick(events), None);
    }

    #[test]
    fn terminal_event_wins_over_progress_in_the_same_tick() {
        let events = vec![
            ProgressEvent::SegmentProgress { completed: 3, total: 3 },
            ProgressEvent::Done { total: 3 },
        ];
        assert_eq!(process_tick(events), Some(ProgressEvent::Done { total: 3 }));
    }

    #[test]
    fn last_terminal_event_wins_when_several_arrive_together() {
        let events = vec![
            ProgressEvent::SegmentProgress { completed: 2, total: 3 },
            ProgressEvent::Failed { reason: "encode failed".to_string() },
        ];
        assert_eq!(
            process_tick(events),
            Some(ProgressEvent::Failed { reason: "encode failed".to_string() })
        );
    }

    #[test]
    fn empty_tick_is_a_no_op() {
        assert_eq!(process_tick(Vec::new()), None);
    }
}
