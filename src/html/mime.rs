use std::path::Path;

use crate::error::{InlineError, Result};

/// Which HTML element a payload is embedded in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
    Audio,
}

impl MediaKind {
    /// MIME top-level type used in the data URI
    pub fn top_level(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Image => "image",
            MediaKind::Audio => "audio",
        }
    }
}

/// Pick the MIME subtype for a file
///
/// An explicit, non-empty override wins. Otherwise the extension is used
/// exactly as written, so `clip.webm` becomes `webm`.
pub fn resolve_subtype(path: &Path, mimetype: Option<&str>) -> Result<String> {
    if let Some(mimetype) = mimetype.filter(|m| !m.is_empty()) {
        return Ok(mimetype.to_string());
    }

    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .filter(|ext| !ext.is_empty())
        .ok_or_else(|| InlineError::UnknownMimeType(path.to_path_buf()))
}

/// Check if a file is an audio file based on its extension
pub fn is_audio_extension(path: &Path) -> bool {
    if let Some(ext) = path.extension() {
        let ext = ext.to_string_lossy().to_lowercase();
        matches!(
            ext.as_str(),
            "mp3" | "flac" | "wav" | "ogg" | "m4a" | "aac" | "aiff" | "opus" | "weba"
        )
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_types() {
        assert_eq!(MediaKind::Video.top_level(), "video");
        assert_eq!(MediaKind::Image.top_level(), "image");
        assert_eq!(MediaKind::Audio.top_level(), "audio");
    }

    #[test]
    fn test_subtype_is_extension() {
        assert_eq!(resolve_subtype(Path::new("clips/intro.mp4"), None).unwrap(), "mp4");
        assert_eq!(resolve_subtype(Path::new("a.b.webm"), None).unwrap(), "webm");
        assert_eq!(resolve_subtype(Path::new("Photo.PNG"), None).unwrap(), "PNG");
    }

    #[test]
    fn test_override_wins() {
        let subtype = resolve_subtype(Path::new("movie.mov"), Some("quicktime")).unwrap();
        assert_eq!(subtype, "quicktime");
    }

    #[test]
    fn test_empty_override_falls_back_to_extension() {
        let subtype = resolve_subtype(Path::new("movie.ogv"), Some("")).unwrap();
        assert_eq!(subtype, "ogv");
    }

    #[test]
    fn test_no_extension_is_error() {
        let result = resolve_subtype(Path::new("/tmp/recording"), None);
        assert!(matches!(result, Err(InlineError::UnknownMimeType(_))));
    }

    #[test]
    fn test_recognizes_audio_formats() {
        assert!(is_audio_extension(Path::new("test.mp3")));
        assert!(is_audio_extension(Path::new("test.M4A")));
        assert!(is_audio_extension(Path::new("test.wav")));
    }

    #[test]
    fn test_rejects_non_audio() {
        assert!(!is_audio_extension(Path::new("test.mp4")));
        assert!(!is_audio_extension(Path::new("test")));
    }
}
