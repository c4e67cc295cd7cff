//! Subprocess seams for the external yt-dlp / ffmpeg / ffprobe binaries
//!
//! The adapters talk to the outside world only through these traits, so the
//! argument construction and output classification stay testable without
//! the binaries installed.

use std::io;
use std::path::Path;
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;

/// Format selector for progressive MP4: a single file carrying both the
/// video and the audio track, best quality available.
pub const PROGRESSIVE_MP4: &str = "best[ext=mp4][vcodec!=none][acodec!=none]";

/// Runner for yt-dlp invocations
#[async_trait]
pub trait YtDlpRunner: Send + Sync {
    /// Dump the source metadata as a single JSON document, without downloading
    async fn run_metadata(&self, url: &str) -> io::Result<Output>;

    /// Download the progressive MP4 format into `dir`, printing the final
    /// file path on stdout
    async fn run_download(&self, url: &str, dir: &Path) -> io::Result<Output>;
}

/// Runner for ffmpeg / ffprobe invocations
#[async_trait]
pub trait FfmpegRunner: Send + Sync {
    /// Re-encode `[start, start+length)` seconds of `source` into `dest`
    async fn run_clip(&self, source: &Path, start: u64, length: u64, dest: &Path)
        -> io::Result<Output>;

    /// Print the container duration of `path` in seconds on stdout
    async fn run_duration_probe(&self, path: &Path) -> io::Result<Output>;
}

/// Real yt-dlp subprocess runner
pub struct SystemYtDlp {
    bin: String,
}

impl SystemYtDlp {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

impl Default for SystemYtDlp {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

#[async_trait]
impl YtDlpRunner for SystemYtDlp {
    async fn run_metadata(&self, url: &str) -> io::Result<Output> {
        Command::new(&self.bin)
            .arg("--dump-single-json")
            .arg("--no-playlist")
            .arg(url)
            .output()
            .await
    }

    async fn run_download(&self, url: &str, dir: &Path) -> io::Result<Output> {
        Command::new(&self.bin)
            .arg("-f").arg(PROGRESSIVE_MP4)
            .arg("--no-playlist")
            .arg("--no-simulate")
            .arg("--print").arg("after_move:filepath")
            .arg("-P").arg(dir)
            .arg(url)
            .output()
            .await
    }
}

/// Real ffmpeg / ffprobe subprocess runner
pub struct SystemFfmpeg {
    ffmpeg_bin: String,
    ffprobe_bin: String,
}

impl SystemFfmpeg {
    pub fn new(ffmpeg_bin: impl Into<String>, ffprobe_bin: impl Into<String>) -> Self {
        Self {
            ffmpeg_bin: ffmpeg_bin.into(),
            ffprobe_bin: ffprobe_bin.into(),
        }
    }
}

impl Default for SystemFfmpeg {
    fn default() -> Self {
        Self::new("ffmpeg", "ffprobe")
    }
}

#[async_trait]
impl FfmpegRunner for SystemFfmpeg {
    async fn run_clip(
        &self,
        source: &Path,
        start: u64,
        length: u64,
        dest: &Path,
    ) -> io::Result<Output> {
        Command::new(&self.ffmpeg_bin)
            .arg("-y")
            .arg("-ss").arg(start.to_string())
            .arg("-i").arg(source)
            .arg("-t").arg(length.to_string())
            .arg("-c:v").arg("libx264")
            .arg("-c:a").arg("aac")
            .arg(dest)
            .output()
            .await
    }

    async fn run_duration_probe(&self, path: &Path) -> io::Result<Output> {
        Command::new(&self.ffprobe_bin)
            .arg("-v").arg("error")
            .arg("-show_entries").arg("format=duration")
            .arg("-of").arg("default=noprint_wrappers=1:nokey=1")
            .arg(path)
            .output()
            .await
    }
}
