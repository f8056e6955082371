//! Test fixtures for inlining tests
//!
//! Synthetic waveforms, scratch media files, and a probe for whether an
//! encoder is installed so end-to-end tests can bail out cleanly.

#![cfg(test)]

use std::f32::consts::PI;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

static ENCODER_AVAILABLE: OnceLock<bool> = OnceLock::new();

/// Generate a mono sine wave with unit amplitude
///
/// # Arguments
/// * `frequency` - Tone frequency in Hz
/// * `duration_secs` - Length in seconds
/// * `sample_rate` - Samples per second
pub fn sine_wave(frequency: f32, duration_secs: f32, sample_rate: u32) -> Vec<f32> {
    let count = (duration_secs * sample_rate as f32).round() as usize;
    (0..count)
        .map(|i| (2.0 * PI * frequency * i as f32 / sample_rate as f32).sin())
        .collect()
}

/// Write `bytes` to `dir/name` and return the path
pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("Failed to write fixture file");
    path
}

/// Bytes that look nothing like text, covering every byte value
pub fn binary_payload() -> Vec<u8> {
    (0..=255u8).cycle().take(4099).collect()
}

/// Whether the default encoder can be run on this machine
pub fn encoder_available() -> bool {
    *ENCODER_AVAILABLE.get_or_init(|| {
        let encoder = crate::encoder::resolve_encoder(None);
        Command::new(&encoder)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sine_wave_length_and_range() {
        let wave = sine_wave(440.0, 1.0, 16000);
        assert_eq!(wave.len(), 16000);
        assert!(wave.iter().all(|s| s.abs() <= 1.0));
        assert_eq!(wave[0], 0.0);
    }

    #[test]
    fn test_write_fixture() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_fixture(temp_dir.path(), "clip.mp4", b"abc");
        assert_eq!(std::fs::read(&path).unwrap(), b"abc");
    }

    #[test]
    fn test_binary_payload_covers_all_bytes() {
        let payload = binary_payload();
        assert_eq!(payload.len(), 4099);
        assert_eq!(payload[255], 255);
        assert_eq!(payload[256], 0);
    }
}
