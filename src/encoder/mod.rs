//! External encoder handling
//!
//! Compression is delegated to an ffmpeg-compatible command-line tool.

mod ffmpeg;

pub use ffmpeg::encode_file;

use std::path::{Path, PathBuf};

/// Environment variable that points at a specific encoder binary
pub const ENCODER_ENV_VAR: &str = "MEDIA_INLINE_FFMPEG";

/// Program name used when nothing more specific is configured
pub const DEFAULT_ENCODER: &str = "ffmpeg";

/// Decide which encoder binary to run
///
/// Lookup order:
/// 1. `explicit` (from `AudioOptions::encoder`)
/// 2. the `MEDIA_INLINE_FFMPEG` environment variable, if non-empty
/// 3. plain `ffmpeg`, left for the OS to find on `PATH`
pub fn resolve_encoder(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Ok(from_env) = std::env::var(ENCODER_ENV_VAR)
        && !from_env.trim().is_empty()
    {
        log::debug!("Using encoder from {}: {}", ENCODER_ENV_VAR, from_env);
        return PathBuf::from(from_env.trim());
    }

    PathBuf::from(DEFAULT_ENCODER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_encoder_wins() {
        let path = resolve_encoder(Some(Path::new("/opt/bin/ffmpeg")));
        assert_eq!(path, PathBuf::from("/opt/bin/ffmpeg"));
    }

    #[test]
    fn test_default_encoder_name() {
        // Only meaningful when the override is not set in the test environment
        if std::env::var_os(ENCODER_ENV_VAR).is_none() {
            assert_eq!(resolve_encoder(None), PathBuf::from("ffmpeg"));
        }
    }
}
