//! Tag builders
//!
//! Every builder returns a single self-closing element whose `src` holds a
//! `data:` URI. Attribute values supplied by the caller are escaped; the
//! base64 alphabet never needs escaping.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::mime::MediaKind;
use crate::options::TagOptions;

/// Build `data:{type}/{subtype};base64,{payload}`
pub fn data_uri(kind: MediaKind, subtype: &str, bytes: &[u8]) -> String {
    format!(
        "data:{}/{};base64,{}",
        kind.top_level(),
        escape_attribute(subtype),
        STANDARD.encode(bytes)
    )
}

/// `<video [width] [height] controls src="..."/>`
pub fn video_tag(options: &TagOptions, uri: &str) -> String {
    format!("<video {}controls src=\"{}\"/>", size_attributes(options), uri)
}

/// `<img [width] [height] src="..."/>`
pub fn image_tag(options: &TagOptions, uri: &str) -> String {
    format!("<img {}src=\"{}\"/>", size_attributes(options), uri)
}

/// `<audio controls src="..."/>`
pub fn audio_tag(uri: &str) -> String {
    format!("<audio controls src=\"{}\"/>", uri)
}

// Each present attribute carries its own trailing space
fn size_attributes(options: &TagOptions) -> String {
    let mut attrs = String::new();
    if let Some(width) = &options.width {
        attrs.push_str(&format!("width=\"{}\" ", escape_attribute(width)));
    }
    if let Some(height) = &options.height {
        attrs.push_str(&format!("height=\"{}\" ", escape_attribute(height)));
    }
    attrs
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}
