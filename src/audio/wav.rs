use hound::{SampleFormat, WavSpec, WavWriter};
use std::io::{Seek, Write};

use crate::error::{InlineError, Result};

/// Write mono 16-bit PCM samples as a WAV stream
pub fn write_wav<W: Write + Seek>(writer: W, samples: &[i16], sample_rate: u32) -> Result<()> {
    if sample_rate == 0 {
        return Err(InlineError::InvalidSampleRate(sample_rate));
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut wav = WavWriter::new(writer, spec)?;
    for &sample in samples {
        wav.write_sample(sample)?;
    }
    wav.finalize()?;
    Ok(())
}
