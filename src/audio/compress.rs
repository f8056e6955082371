//! Compress raw samples and pack them into an `<audio>` tag
//!
//! Pipeline: condition -> quantize -> temp WAV -> encoder -> temp container
//! -> base64 -> tag. Both temp files are `NamedTempFile`s and are removed
//! when they drop, whichever step fails.

use std::fs;
use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;

use tempfile::{Builder, NamedTempFile};

use super::normalize::{quantize, rescale};
use super::wav::write_wav;
use crate::encoder::{encode_file, resolve_encoder};
use crate::error::{InlineError, Result};
use crate::html::{MediaKind, audio_tag, data_uri};
use crate::options::AudioOptions;

/// Compress `samples` with the default encoder settings into an `<audio>` tag
///
/// # Arguments
/// * `samples` - Mono audio samples, nominally in [-1, 1]
/// * `sample_rate` - Samples per second (must be positive)
/// * `rescale` - Mean-center and peak-normalize before quantizing
///
/// # Returns
/// `<audio controls src="data:audio/m4a;base64,..."/>`
pub fn inline_compressed_audio(samples: &[f32], sample_rate: u32, rescale: bool) -> Result<String> {
    let options = AudioOptions::default().with_rescale(rescale);
    inline_compressed_audio_with(samples, sample_rate, &options)
}

/// Same as [`inline_compressed_audio`] with full control over the encoder
pub fn inline_compressed_audio_with(
    samples: &[f32],
    sample_rate: u32,
    options: &AudioOptions,
) -> Result<String> {
    if sample_rate == 0 {
        return Err(InlineError::InvalidSampleRate(sample_rate));
    }
    if !is_plain_extension(&options.container) {
        return Err(InlineError::InvalidContainer(options.container.clone()));
    }

    let pcm = condition(samples, options.rescale);
    let compressed = compress_pcm(&pcm, sample_rate, options)?;

    log::debug!(
        "Compressed {} samples @ {} Hz into {} bytes of {}",
        samples.len(),
        sample_rate,
        compressed.len(),
        options.container
    );

    let uri = data_uri(MediaKind::Audio, &options.container, &compressed);
    Ok(audio_tag(&uri))
}

/// The container becomes a file suffix and a MIME subtype, so only
/// ASCII letters and digits are allowed
fn is_plain_extension(container: &str) -> bool {
    !container.is_empty() && container.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Work on a copy so the caller's buffer is left as it was
fn condition(samples: &[f32], normalize: bool) -> Vec<i16> {
    let mut working = samples.to_vec();
    if normalize {
        rescale(&mut working);
    }
    quantize(&working)
}

fn compress_pcm(pcm: &[i16], sample_rate: u32, options: &AudioOptions) -> Result<Vec<u8>> {
    let temp_dir = options.temp_dir.as_deref();

    let mut wav_file = scoped_temp_file(".wav", temp_dir)?;
    write_wav(BufWriter::new(wav_file.as_file_mut()), pcm, sample_rate)?;

    let out_file = scoped_temp_file(&format!(".{}", options.container), temp_dir)?;

    let encoder = resolve_encoder(options.encoder.as_deref());
    let timeout = options.timeout_secs.map(Duration::from_secs);
    encode_file(&encoder, wav_file.path(), out_file.path(), timeout)?;

    let bytes = fs::read(out_file.path()).map_err(|e| InlineError::io(out_file.path(), e))?;
    if bytes.is_empty() {
        return Err(InlineError::EncodingFailed {
            status: "exit status: 0".to_string(),
            detail: format!("encoder produced no output for {}", options.container),
        });
    }

    Ok(bytes)
}

fn scoped_temp_file(suffix: &str, dir: Option<&Path>) -> Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix("media-inline-").suffix(suffix);

    match dir {
        Some(dir) => builder.tempfile_in(dir).map_err(|e| InlineError::io(dir, e)),
        None => builder
            .tempfile()
            .map_err(|e| InlineError::io(std::env::temp_dir(), e)),
    }
}
