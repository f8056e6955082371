//! Options for the inlining operations
//!
//! Both option structures serialize to JSON so a host application can keep
//! them next to its other settings. Missing fields fall back to defaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InlineError, Result};

/// Container the audio encoder produces unless told otherwise
pub const DEFAULT_CONTAINER: &str = "m4a";

/// Encoder wall-time limit in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Display hints and MIME override for a file-backed tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagOptions {
    /// HTML width attribute (omitted when None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    /// HTML height attribute (omitted when None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,

    /// MIME subtype, e.g. "mp4". If None, taken from the file extension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
}

impl TagOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: impl ToString) -> Self {
        self.width = Some(width.to_string());
        self
    }

    pub fn with_height(mut self, height: impl ToString) -> Self {
        self.height = Some(height.to_string());
        self
    }

    pub fn with_mimetype(mut self, mimetype: impl ToString) -> Self {
        self.mimetype = Some(mimetype.to_string());
        self
    }
}

/// Settings for compressing raw samples into an `<audio>` tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioOptions {
    /// Mean-center and peak-normalize before quantizing
    pub rescale: bool,

    /// Explicit encoder binary. None = resolve from environment / PATH
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoder: Option<PathBuf>,

    /// Output container; doubles as the MIME subtype of the tag
    pub container: String,

    /// Kill the encoder after this many seconds. None = wait forever
    pub timeout_secs: Option<u64>,

    /// Where the scoped temporary files are created. None = OS temp dir
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<PathBuf>,
}

impl Default for AudioOptions {
    fn default() -> Self {
        Self {
            rescale: true,
            encoder: None,
            container: DEFAULT_CONTAINER.to_string(),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            temp_dir: None,
        }
    }
}

impl AudioOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rescale(mut self, rescale: bool) -> Self {
        self.rescale = rescale;
        self
    }

    pub fn with_encoder(mut self, encoder: impl Into<PathBuf>) -> Self {
        self.encoder = Some(encoder.into());
        self
    }

    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = container.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: Option<u64>) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_temp_dir(mut self, temp_dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(temp_dir.into());
        self
    }
}

/// Save options to a file as pretty-printed JSON
pub fn save_options<T: Serialize>(options: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(options)?;

    fs::write(path, json).map_err(|e| InlineError::io(path, e))?;

    log::debug!("Saved options to {}", path.display());
    Ok(())
}

/// Load options from a JSON file
pub fn load_options<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|e| InlineError::io(path, e))?;

    let options = serde_json::from_str(&contents)?;

    Ok(options)
}
