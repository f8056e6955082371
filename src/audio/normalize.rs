//! Sample conditioning before quantization

/// Multiplier from [-1, 1] floats to 16-bit PCM, kept a little under
/// `i16::MAX` so a full-scale peak never clips.
pub const QUANT_SCALE: f32 = 32676.0;

/// Mean-center the buffer, then scale it so its peak magnitude is 1.0
///
/// Returns `false` when peak normalization was skipped: an empty buffer, or
/// one that is silent after centering (all zeros, or a constant signal).
/// The buffer is still mean-centered in that case.
pub fn rescale(samples: &mut [f32]) -> bool {
    if samples.is_empty() {
        return false;
    }

    let mean = (samples.iter().map(|&s| s as f64).sum::<f64>() / samples.len() as f64) as f32;
    for sample in samples.iter_mut() {
        *sample -= mean;
    }

    let peak = peak_amplitude(samples);
    if peak == 0.0 || !peak.is_finite() {
        log::debug!("Skipping peak normalization (peak = {})", peak);
        return false;
    }

    for sample in samples.iter_mut() {
        *sample /= peak;
    }
    true
}

/// Largest absolute sample value (0.0 for an empty buffer)
pub fn peak_amplitude(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0_f32, |peak, &s| peak.max(s.abs()))
}

/// Convert floats to 16-bit PCM, truncating toward zero
///
/// Values outside [-1, 1] saturate at the i16 bounds; NaN becomes 0.
pub fn quantize(samples: &[f32]) -> Vec<i16> {
    samples.iter().map(|&s| (s * QUANT_SCALE) as i16).collect()
}
