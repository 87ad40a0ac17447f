//! Preview/editor override sources

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use storefront_settings::loader::MAX_SETTINGS_SIZE;
use storefront_settings::{OverrideSet, SettingsFormat};

use crate::error::FetchError;

/// A source of preview overrides, consulted only in editor mode.
#[async_trait]
pub trait PreviewSource: Send + Sync {
    /// Name used in logs and degradation reports.
    fn name(&self) -> &str;

    /// An essential source aborts the bootstrap when it fails instead of
    /// being skipped.
    fn essential(&self) -> bool {
        false
    }

    async fn fetch(&self) -> Result<OverrideSet, FetchError>;
}

/// Preview overrides stored in a JSON, TOML or YAML file.
#[derive(Debug, Clone)]
pub struct FilePreviewSource {
    path: PathBuf,
    name: String,
    essential: bool,
}

impl FilePreviewSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: format!("file:{}", path.display()),
            path,
            essential: false,
        }
    }

    /// Mark the source essential.
    pub fn required(mut self) -> Self {
        self.essential = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, reason: impl ToString) -> FetchError {
        FetchError::Unavailable {
            source_name: self.name.clone(),
            reason: reason.to_string(),
        }
    }

    fn invalid(&self, reason: impl ToString) -> FetchError {
        FetchError::Invalid {
            source_name: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl PreviewSource for FilePreviewSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn essential(&self) -> bool {
        self.essential
    }

    async fn fetch(&self) -> Result<OverrideSet, FetchError> {
        let format = SettingsFormat::from_path(&self.path).map_err(|e| self.invalid(e))?;

        let metadata = tokio::fs::metadata(&self.path)
            .await
            .map_err(|e| self.unavailable(e))?;
        if metadata.len() > MAX_SETTINGS_SIZE {
            return Err(self.invalid(format!(
                "{} bytes exceeds the {} byte limit",
                metadata.len(),
                MAX_SETTINGS_SIZE
            )));
        }

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.unavailable(e))?;
        let value = format.parse(&content).map_err(|e| self.invalid(e))?;
        let overrides = OverrideSet::from_value(value).map_err(|e| self.invalid(e))?;

        tracing::debug!(
            source = %self.name,
            leaves = overrides.leaf_paths().len(),
            "Fetched preview overrides"
        );
        Ok(overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_test_utils::SettingsDir;

    #[tokio::test]
    async fn reads_overrides_from_json_file() {
        let dir = SettingsDir::new();
        let path = dir.write_json("preview.json", &json!({ "colors": { "accent": "#f06" } }));

        let overrides = FilePreviewSource::new(path).fetch().await.unwrap();
        assert_eq!(overrides.leaf_paths(), vec!["colors.accent"]);
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let dir = SettingsDir::new();
        let source = FilePreviewSource::new(dir.root().join("absent.json"));

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Unavailable { .. }));
        assert!(!source.essential());
        assert!(source.required().essential());
    }

    #[tokio::test]
    async fn non_mapping_content_is_invalid() {
        let dir = SettingsDir::new();
        let path = dir.write_raw("preview.json", "[1, 2, 3]");

        let err = FilePreviewSource::new(path).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Invalid { .. }));
    }

    #[tokio::test]
    async fn unknown_extension_is_invalid() {
        let dir = SettingsDir::new();
        let path = dir.write_raw("preview.ini", "accent = red");

        let err = FilePreviewSource::new(path).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Invalid { .. }));
    }
}
