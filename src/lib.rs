//! Media Inline
//!
//! Embed media in HTML as base64 `data:` URIs so a page, notebook or report
//! carries its videos, images and sounds without external references.
//!
//! ```no_run
//! use media_inline::{inline_compressed_audio, inline_video, TagOptions};
//!
//! let video = inline_video("demo.mp4", &TagOptions::new().with_width(640))?;
//!
//! let tone: Vec<f32> = (0..16000)
//!     .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / 16000.0).sin())
//!     .collect();
//! let audio = inline_compressed_audio(&tone, 16000, true)?;
//! # Ok::<(), media_inline::InlineError>(())
//! ```

pub mod audio;
pub mod encoder;
pub mod error;
pub mod html;
pub mod inline;
pub mod logging;
pub mod options;

#[cfg(test)]
mod test_fixtures;

pub use audio::{inline_compressed_audio, inline_compressed_audio_with};
pub use error::{InlineError, Result};
pub use inline::{inline_audio_file, inline_image, inline_video};
pub use options::{AudioOptions, TagOptions, load_options, save_options};
