//! Format-aware loading of settings documents
//!
//! The format is detected from the file extension:
//! - `.json` -> JSON
//! - `.toml` -> TOML
//! - `.yaml`, `.yml` -> YAML

use std::fmt;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::document::SettingsDocument;
use crate::{Error, Result};

/// Maximum accepted size of a settings file (1 MiB)
pub const MAX_SETTINGS_SIZE: u64 = 1024 * 1024;

/// Serialization format of a settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Json,
    Toml,
    Yaml,
}

impl SettingsFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Detect the format of a path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_extension(&extension).ok_or(Error::UnsupportedFormat { extension })
    }

    /// Parse `content` into an untyped settings tree.
    pub fn parse(self, content: &str) -> std::result::Result<Value, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

impl fmt::Display for SettingsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Toml => write!(f, "TOML"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

/// Parse a settings document from a string in the given format.
pub fn parse_document(content: &str, format: SettingsFormat) -> Result<SettingsDocument> {
    let value = format.parse(content).map_err(|message| Error::ConfigParse {
        path: "<inline>".into(),
        format: format.to_string(),
        message,
    })?;
    Ok(SettingsDocument::from_value(value)?)
}

/// Load and validate a settings document from disk.
pub fn load_document(path: &Path) -> Result<SettingsDocument> {
    let format = SettingsFormat::from_path(path)?;

    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    if metadata.len() > MAX_SETTINGS_SIZE {
        return Err(Error::ConfigTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_SETTINGS_SIZE,
        });
    }

    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let value = format.parse(&content).map_err(|message| Error::ConfigParse {
        path: path.to_path_buf(),
        format: format.to_string(),
        message,
    })?;

    tracing::debug!(?path, %format, "Loaded settings document");
    Ok(SettingsDocument::from_value(value)?)
}
