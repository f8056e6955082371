//! Error type shared by every inlining operation

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, InlineError>;

#[derive(Debug, Error)]
pub enum InlineError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot infer a MIME type for {} (no extension and no override)", .0.display())]
    UnknownMimeType(PathBuf),

    #[error("invalid audio container {0:?} (expected a plain extension like \"m4a\")")]
    InvalidContainer(String),

    #[error("sample rate must be positive, got {0}")]
    InvalidSampleRate(u32),

    #[error("failed to write WAV data: {0}")]
    Wav(#[from] hound::Error),

    #[error("encoder not found: {}", .0.display())]
    EncoderNotFound(PathBuf),

    #[error("encoder exited with {status}: {detail}")]
    EncodingFailed { status: String, detail: String },

    #[error("encoder {} did not finish within {timeout:?}", .encoder.display())]
    EncoderTimeout { encoder: PathBuf, timeout: Duration },

    #[error("invalid options file: {0}")]
    Config(#[from] serde_json::Error),
}

impl InlineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InlineError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn encoding_failed(status: ExitStatus, detail: impl Into<String>) -> Self {
        InlineError::EncodingFailed {
            status: status.to_string(),
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = InlineError::io(
            "/media/clip.mp4",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let message = err.to_string();
        assert!(message.contains("/media/clip.mp4"));
        assert!(message.contains("missing"));
    }

    #[test]
    fn test_encoding_failed_display() {
        let err = InlineError::EncodingFailed {
            status: "exit status: 1".to_string(),
            detail: "Invalid data found when processing input".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "encoder exited with exit status: 1: Invalid data found when processing input"
        );
    }
}
