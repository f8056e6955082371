//! File-backed inlining
//!
//! Reads a media file whole and embeds it without transcoding.

mod file;

pub use file::{inline_audio_file, inline_image, inline_video};
