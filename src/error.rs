//! Error handling module for reelsplit

use thiserror::Error;

/// Main error type for reelsplit operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// Malformed or unrecognized source URL
    #[error("Invalid video URL: {url}")]
    InvalidUrl { url: String },

    /// Source exists but cannot be fetched
    #[error("Video unavailable: {detail}")]
    Unavailable { detail: String },

    /// Source is private
    #[error("Video is private: {detail}")]
    Private { detail: String },

    /// No download format satisfies the progressive MP4 constraint
    #[error("No suitable stream found for {url}")]
    NoCompatibleStream { url: String },

    /// A segment failed to materialize
    #[error("Segment encode failed: {detail}")]
    Encode { detail: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for any other fetch or encode stage failure
    #[error("An unexpected error occurred: {detail}")]
    Unexpected { detail: String },
}

impl SplitError {
    /// True for fetch-stage failures, which abort before any segment work
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            SplitError::InvalidUrl { .. }
                | SplitError::Unavailable { .. }
                | SplitError::Private { .. }
                | SplitError::NoCompatibleStream { .. }
        )
    }
}

/// Result type alias for reelsplit operations
pub type SplitResult<T> = std::result::Result<T, SplitError>;
