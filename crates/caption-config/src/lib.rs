//! Caption configuration system
//!
//! Loads title entry settings (font, placeholder, colors, caret behaviour)
//! from `caption.toml`, with environment variables taking precedence.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "caption.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CaptionConfig {
    /// Font used to measure and draw entry text
    pub font: FontConfig,
    /// Entry appearance and caret behaviour
    pub entry: EntryConfig,
}

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    /// Face family name
    pub family: String,
    /// Size in logical pixels
    pub size_px: f32,
    /// Path to a .ttf/.otf file used for measurement. Without one, a
    /// fixed-advance approximation is used.
    pub path: Option<PathBuf>,
}

/// Title entry configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EntryConfig {
    /// Label shown while the entry is empty
    pub placeholder: String,
    /// sRGBA of entered text
    pub text_color: [u8; 4],
    /// sRGBA of the placeholder label
    pub placeholder_color: [u8; 4],
    /// sRGBA of the caret
    pub caret_color: [u8; 4],
    /// Caret width in pixels
    pub caret_width: f32,
    /// Blink the caret while focused
    pub caret_blink: bool,
    /// Blink half-period in seconds
    pub blink_interval: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            size_px: 18.0,
            path: None,
        }
    }
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            placeholder: "TITLE".to_string(),
            text_color: [0, 0, 0, 255],
            placeholder_color: [192, 192, 192, 255],
            caret_color: [0, 0, 0, 255],
            caret_width: 1.0,
            caret_blink: true,
            blink_interval: 0.5,
        }
    }
}

fn parse_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl CaptionConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `caption.toml` from the current directory, or defaults if it is
    /// missing or malformed.
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("ignoring {}: {}", CONFIG_FILE, err);
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(font) = std::env::var("CAPTION_FONT") {
            self.font.path = Some(PathBuf::from(font));
        }
        if let Ok(family) = std::env::var("CAPTION_FONT_FAMILY") {
            self.font.family = family;
        }
        if let Ok(val) = std::env::var("CAPTION_TEXT_SIZE") {
            match val.parse::<f32>() {
                Ok(size) if size > 0.0 => self.font.size_px = size,
                _ => warn!("ignoring CAPTION_TEXT_SIZE={val:?}"),
            }
        }
        if let Ok(placeholder) = std::env::var("CAPTION_PLACEHOLDER") {
            self.entry.placeholder = placeholder;
        }
        if let Ok(val) = std::env::var("CAPTION_CARET_BLINK") {
            self.entry.caret_blink = parse_flag(&val);
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from caption.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
