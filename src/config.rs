//! Configuration with the precedence CLI > environment > file > defaults
//!
//! The file format is TOML; environment overrides use the `REELSPLIT_`
//! prefix. CLI flags are applied last by the command layer.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{SplitError, SplitResult};
use crate::planner::DEFAULT_SEGMENT_SECONDS;

/// Environment variable prefix for overrides
const ENV_PREFIX: &str = "REELSPLIT_";

/// Runtime configuration for one invocation
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory the downloaded video and its segments are written to
    pub output_dir: PathBuf,
    /// Segment window length in seconds
    pub segment_seconds: u64,
    /// Append-only diagnostics log file
    pub log_file: PathBuf,
    /// External binaries
    pub ytdlp_bin: String,
    pub ffmpeg_bin: String,
    pub ffprobe_bin: String,
}

impl Default for Config {
    fn default() -> Self {
        let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
        Self {
            output_dir: home.join("Desktop").join("YouTube_Reels"),
            segment_seconds: DEFAULT_SEGMENT_SECONDS,
            log_file: PathBuf::from("reelsplit.log"),
            ytdlp_bin: "yt-dlp".to_string(),
            ffmpeg_bin: "ffmpeg".to_string(),
            ffprobe_bin: "ffprobe".to_string(),
        }
    }
}

impl Config {
    /// Load configuration: defaults, then the config file (if present),
    /// then `REELSPLIT_*` environment overrides.
    pub fn load(file: Option<&Path>) -> SplitResult<Self> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new("reelsplit.toml");
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env_overrides(std::env::vars());
        Ok(config)
    }

    /// Parse a config file on top of the defaults
    pub fn from_file(path: &Path) -> SplitResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    fn from_toml(content: &str) -> SplitResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| SplitError::Unexpected {
            detail: format!("invalid config file: {}", e),
        })?;
        if config.segment_seconds == 0 {
            return Err(SplitError::Unexpected {
                detail: "invalid config file: segment_seconds must be positive".to_string(),
            });
        }
        Ok(config)
    }

    /// Apply `REELSPLIT_*` variables from `vars`
    fn apply_env_overrides(&mut self, vars: impl Iterator<Item = (String, String)>) {
        for (key, value) in vars {
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            match name {
                "OUTPUT_DIR" => self.output_dir = PathBuf::from(value),
                "SEGMENT_SECONDS" => {
                    if let Ok(seconds) = value.parse() {
                        if seconds > 0 {
                            self.segment_seconds = seconds;
                        }
                    }
                }
                "LOG_FILE" => self.log_file = PathBuf::from(value),
                "YTDLP_BIN" => self.ytdlp_bin = value,
                "FFMPEG_BIN" => self.ffmpeg_bin = value,
                "FFPROBE_BIN" => self.ffprobe_bin = value,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_sixty_second_windows() {
        let config = Config::default();
        assert_eq!(config.segment_seconds, 60);
        assert_eq!(config.ytdlp_bin, "yt-dlp");
    }

    #[test]
    fn file_values_override_defaults() {
        let config = Config::from_toml(
            r#"
            output_dir = "/srv/reels"
            segment_seconds = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/srv/reels"));
        assert_eq!(config.segment_seconds, 30);
        assert_eq!(config.ffmpeg_bin, "ffmpeg");
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        assert!(Config::from_toml("not_a_key = 1").is_err());
    }

    #[test]
    fn env_overrides_beat_file_values() {
        let mut config = Config::from_toml(r#"segment_seconds = 30"#).unwrap();
        config.apply_env_overrides(
            vec![
                ("REELSPLIT_SEGMENT_SECONDS".to_string(), "45".to_string()),
                ("REELSPLIT_FFMPEG_BIN".to_string(), "/opt/ffmpeg".to_string()),
                ("UNRELATED".to_string(), "ignored".to_string()),
            ]
            .into_iter(),
        );
        assert_eq!(config.segment_seconds, 45);
        assert_eq!(config.ffmpeg_bin, "/opt/ffmpeg");
    }

    #[test]
    fn malformed_env_numbers_are_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(
            vec![("REELSPLIT_SEGMENT_SECONDS".to_string(), "soon".to_string())].into_iter(),
        );
        assert_eq!(config.segment_seconds, 60);
    }

    #[test]
    fn zero_segment_window_in_file_is_rejected() {
        let err = Config::from_toml("segment_seconds = 0").unwrap_err();
        assert!(err.to_string().contains("segment_seconds must be positive"));
    }

    #[test]
    fn zero_segment_window_from_env_is_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(
            vec![("REELSPLIT_SEGMENT_SECONDS".to_string(), "0".to_string())].into_iter(),
        );
        assert_eq!(config.segment_seconds, 60);
    }
}
