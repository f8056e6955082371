//! HTML tag and data URI construction

pub mod mime;
pub mod tag;

pub use mime::{MediaKind, is_audio_extension, resolve_subtype};
pub use tag::{audio_tag, data_uri, image_tag, video_tag};
