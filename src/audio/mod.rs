// Audio module - sample conditioning, WAV writing and compressed embedding

pub mod compress;
pub mod normalize;
pub mod wav;

pub use compress::{inline_compressed_audio, inline_compressed_audio_with};
pub use normalize::{QUANT_SCALE, peak_amplitude, quantize, rescale};
pub use wav::write_wav;
