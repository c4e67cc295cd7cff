// Adapters - Concrete implementations of the ports

pub mod cmd;
pub mod ffmpeg;
pub mod ytdlp;

pub use cmd::{SystemFfmpeg, SystemYtDlp};
pub use ffmpeg::FfmpegSegmentEncoder;
pub use ytdlp::YtDlpFetcher;
