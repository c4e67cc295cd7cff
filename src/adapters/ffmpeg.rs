//! ffmpeg backed segment encoder

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::adapters::cmd::FfmpegRunner;
use crate::error::{SplitError, SplitResult};
use crate::ports::SegmentEncoder;

/// `SegmentEncoder` implementation re-encoding each window with libx264
pub struct FfmpegSegmentEncoder<F> {
    ffmpeg: F,
}

impl<F: FfmpegRunner> FfmpegSegmentEncoder<F> {
    pub fn new(ffmpeg: F) -> Self {
        Self { ffmpeg }
    }
}

#[async_trait]
impl<F: FfmpegRunner> SegmentEncoder for FfmpegSegmentEncoder<F> {
    async fn encode(&self, source: &Path, start: u64, end: u64, dest: &Path) -> SplitResult<()> {
        if end <= start {
            return Err(SplitError::Encode {
                detail: format!("invalid segment range {}..{}", start, end),
            });
        }

        debug!(
            "encoding {}..{} of {} into {}",
            start,
            end,
            source.display(),
            dest.display()
        );

        let output = self
            .ffmpeg
            .run_clip(source, start, end - start, dest)
            .await
            .map_err(|e| SplitError::Encode {
                detail: format!("could not launch ffmpeg: {}", e),
            })?;

        if !output.status.success() {
            return Err(SplitError::Encode {
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
