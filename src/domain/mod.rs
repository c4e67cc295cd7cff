//! Core domain types for the download-and-segment pipeline

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{SplitError, SplitResult};

/// Hosts recognized as video sources (non-exhaustive, matched by suffix)
const VIDEO_HOSTS: &[&str] = &[
    "youtube.com",
    "youtu.be",
    "music.youtube.com",
    "vimeo.com",
    "dailymotion.com",
    "twitch.tv",
];

/// One pipeline run: a validated source URL plus the output directory.
///
/// Immutable for the life of the run.
#[derive(Debug, Clone)]
pub struct Job {
    pub url: String,
    pub output_dir: PathBuf,
}

impl Job {
    /// Create a job, rejecting empty or unrecognized source URLs
    pub fn new(url: &str, output_dir: PathBuf) -> SplitResult<Self> {
        if url.trim().is_empty() {
            return Err(SplitError::InvalidUrl {
                url: "<empty>".to_string(),
            });
        }

        let parsed = Url::parse(url).map_err(|_| SplitError::InvalidUrl {
            url: url.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SplitError::InvalidUrl {
                url: url.to_string(),
            });
        }

        let host = parsed.host_str().ok_or_else(|| SplitError::InvalidUrl {
            url: url.to_string(),
        })?;

        let recognized = VIDEO_HOSTS
            .iter()
            .any(|h| host == *h || host.ends_with(&format!(".{}", h)));
        if !recognized {
            return Err(SplitError::InvalidUrl {
                url: url.to_string(),
            });
        }

        Ok(Self {
            url: url.to_string(),
            output_dir,
        })
    }
}

/// A source video resolved to a local file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedMedia {
    /// Path of the downloaded file
    pub path: PathBuf,
    /// Total duration in whole seconds
    pub duration_seconds: u64,
}

impl FetchedMedia {
    /// Original filename of the downloaded media
    pub fn file_name(&self) -> SplitResult<&str> {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| SplitError::Unexpected {
                detail: format!("downloaded file has no usable name: {}", self.path.display()),
            })
    }
}

/// Output filename for one segment: `part-<index>_<original-filename>`
///
/// Index is 1-based with no zero padding.
pub fn segment_file_name(index: usize, source: &Path) -> String {
    let original = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "video.mp4".to_string());
    format!("part-{}_{}", index, original)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_accepts_recognized_video_urls() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "http://vimeo.com/12345",
        ] {
            assert!(Job::new(url, PathBuf::from("/tmp/out")).is_ok(), "{}", url);
        }
    }

    #[test]
    fn job_rejects_empty_url() {
        let err = Job::new("  ", PathBuf::from("/tmp/out")).unwrap_err();
        assert!(matches!(err, SplitError::InvalidUrl { .. }));
    }

    #[test]
    fn job_rejects_unrecognized_hosts_and_schemes() {
        for url in [
            "https://example.com/video.mp4",
            "ftp://youtube.com/watch?v=abc",
            "not a url at all",
            "https://notyoutube.complete.org/x",
        ] {
            let err = Job::new(url, PathBuf::from("/tmp/out")).unwrap_err();
            assert!(matches!(err, SplitError::InvalidUrl { .. }), "{}", url);
        }
    }

    #[test]
    fn segment_file_names_are_one_based_and_unpadded() {
        let source = Path::new("/downloads/My Talk.mp4");
        assert_eq!(segment_file_name(1, source), "part-1_My Talk.mp4");
        assert_eq!(segment_file_name(12, source), "part-12_My Talk.mp4");
    }
}
