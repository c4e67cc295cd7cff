//! yt-dlp backed source fetcher
//!
//! Resolves a video URL to a downloaded local file in two passes: a metadata
//! probe that verifies a progressive MP4 format exists, then the actual
//! download. The duration is read back from the downloaded file with
//! ffprobe, truncated to whole seconds.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::adapters::cmd::{FfmpegRunner, YtDlpRunner};
use crate::domain::FetchedMedia;
use crate::error::{SplitError, SplitResult};
use crate::ports::SourceFetcher;

/// The subset of yt-dlp's metadata JSON the fetcher cares about
#[derive(Debug, Deserialize)]
struct VideoMetadata {
    #[serde(default)]
    formats: Vec<FormatEntry>,
}

#[derive(Debug, Deserialize)]
struct FormatEntry {
    #[serde(default)]
    ext: Option<String>,
    #[serde(default)]
    vcodec: Option<String>,
    #[serde(default)]
    acodec: Option<String>,
}

impl FormatEntry {
    /// Progressive: one file carrying both video and audio
    fn is_progressive_mp4(&self) -> bool {
        let has = |codec: &Option<String>| {
            codec.as_deref().map(|c| c != "none").unwrap_or(false)
        };
        self.ext.as_deref() == Some("mp4") && has(&self.vcodec) && has(&self.acodec)
    }
}

/// `SourceFetcher` implementation shelling out to yt-dlp
pub struct YtDlpFetcher<Y, F> {
    ytdlp: Y,
    ffmpeg: F,
    download_dir: PathBuf,
}

impl<Y: YtDlpRunner, F: FfmpegRunner> YtDlpFetcher<Y, F> {
    pub fn new(ytdlp: Y, ffmpeg: F, download_dir: PathBuf) -> Self {
        Self {
            ytdlp,
            ffmpeg,
            download_dir,
        }
    }

    async fn probe_duration(&self, path: &PathBuf) -> SplitResult<u64> {
        let output = self.ffmpeg.run_duration_probe(path).await?;
        if !output.status.success() {
            return Err(SplitError::Unexpected {
                detail: format!(
                    "ffprobe failed for {}: {}",
                    path.display(),
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let seconds: f64 = stdout.trim().parse().map_err(|_| SplitError::Unexpected {
            detail: format!("unparseable ffprobe duration output: {:?}", stdout.trim()),
        })?;
        Ok(seconds as u64)
    }
}

#[async_trait]
impl<Y: YtDlpRunner, F: FfmpegRunner> SourceFetcher for YtDlpFetcher<Y, F> {
    async fn fetch(&self, url: &str) -> SplitResult<FetchedMedia> {
        debug!("probing metadata for {}", url);
        let metadata_out = self.ytdlp.run_metadata(url).await?;
        if !metadata_out.status.success() {
            return Err(classify_ytdlp_failure(
                url,
                &String::from_utf8_lossy(&metadata_out.stderr),
            ));
        }

        let metadata: VideoMetadata = serde_json::from_slice(&metadata_out.stdout)
            .map_err(|e| SplitError::Unexpected {
                detail: format!("unparseable yt-dlp metadata: {}", e),
            })?;
        if !metadata.formats.iter().any(FormatEntry::is_progressive_mp4) {
            return Err(SplitError::NoCompatibleStream {
                url: url.to_string(),
            });
        }

        info!("downloading {} into {}", url, self.download_dir.display());
        let download_out = self.ytdlp.run_download(url, &self.download_dir).await?;
        if !download_out.status.success() {
            return Err(classify_ytdlp_failure(
                url,
                &String::from_utf8_lossy(&download_out.stderr),
            ));
        }

        let stdout = String::from_utf8_lossy(&download_out.stdout);
        let path = stdout
            .lines()
            .rev()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| SplitError::Unexpected {
                detail: "yt-dlp reported no downloaded file path".to_string(),
            })?;

        let duration_seconds = self.probe_duration(&path).await?;
        Ok(FetchedMedia {
            path,
            duration_seconds,
        })
    }
}

/// Map yt-dlp's stderr onto the fetch error taxonomy
fn classify_ytdlp_failure(url: &str, stderr: &str) -> SplitError {
    let lowered = stderr.to_lowercase();

    if lowered.contains("private video") || lowered.contains("video is private") {
        SplitError::Private {
            detail: "this video is private".to_string(),
        }
    } else if lowered.contains("video unavailable")
        || lowered.contains("has been removed")
        || lowered.contains("is not available")
    {
        SplitError::Unavailable {
            detail: "the video is unavailable".to_string(),
        }
    } else if lowered.contains("unsupported url") || lowered.contains("is not a valid url") {
        SplitError::InvalidUrl {
            url: url.to_string(),
        }
    } else if lowered.contains("requested format is not available") {
        SplitError::NoCompatibleStream {
            url: url.to_string(),
        }
    } else {
        SplitError::Unexpected {
            detail: stderr.trim().to_string(),
        }
    }
}
