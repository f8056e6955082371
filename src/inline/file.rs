use std::fs;
use std::path::Path;

use crate::error::{InlineError, Result};
use crate::html::{MediaKind, audio_tag, data_uri, image_tag, resolve_subtype, video_tag};
use crate::options::TagOptions;

/// Create an HTML `<video>` tag with the file embedded as base64
///
/// # Arguments
/// * `path` - Video file to embed
/// * `options` - Width/height hints and an optional MIME subtype override.
///   Without an override the subtype is the file extension.
///
/// # Returns
/// `<video [width="W" ][height="H" ]controls src="data:video/{subtype};base64,..."/>`
pub fn inline_video(path: impl AsRef<Path>, options: &TagOptions) -> Result<String> {
    let uri = embed(path.as_ref(), MediaKind::Video, options)?;
    Ok(video_tag(options, &uri))
}

/// Create an HTML `<img>` tag with the file embedded as base64
///
/// The data URI uses the `image/` top-level type.
pub fn inline_image(path: impl AsRef<Path>, options: &TagOptions) -> Result<String> {
    let uri = embed(path.as_ref(), MediaKind::Image, options)?;
    Ok(image_tag(options, &uri))
}

/// Embed an already-compressed audio file in an `<audio>` tag
///
/// Width and height are ignored; only `mimetype` is read from `options`.
pub fn inline_audio_file(path: impl AsRef<Path>, options: &TagOptions) -> Result<String> {
    let path = path.as_ref();
    if options.mimetype.is_none() && !crate::html::is_audio_extension(path) {
        log::warn!(
            "{} does not have a known audio extension; embedding anyway",
            path.display()
        );
    }
    let uri = embed(path, MediaKind::Audio, options)?;
    Ok(audio_tag(&uri))
}

fn embed(path: &Path, kind: MediaKind, options: &TagOptions) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| InlineError::io(path, e))?;
    let subtype = resolve_subtype(path, options.mimetype.as_deref())?;

    log::debug!(
        "Embedding {} ({} bytes) as {}/{}",
        path.display(),
        bytes.len(),
        kind.top_level(),
        subtype
    );

    Ok(data_uri(kind, &subtype, &bytes))
}
