//! Read-only holder of the base settings document

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::Result;
use crate::document::SettingsDocument;
use crate::loader::load_document;

/// The base settings document, loaded once and shared read-only.
///
/// Cloning the store is cheap; every clone points at the same document.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    source: Option<PathBuf>,
    document: Arc<SettingsDocument>,
}

impl SettingsStore {
    /// Load the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let document = load_document(path)?;
        tracing::info!(path = %path.display(), "Settings store loaded");
        Ok(Self {
            source: Some(path.to_path_buf()),
            document: Arc::new(document),
        })
    }

    /// Wrap an already built document.
    pub fn from_document(document: SettingsDocument) -> Self {
        Self {
            source: None,
            document: Arc::new(document),
        }
    }

    pub fn document(&self) -> &SettingsDocument {
        &self.document
    }

    /// File the document was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn load_reads_document_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(&path, r#"{ "analytics": { "gtmId": "GTM-D" } }"#).unwrap();

        let store = SettingsStore::load(&path).unwrap();
        assert_eq!(store.source(), Some(path.as_path()));
        assert_eq!(store.document().as_map()["analytics"]["gtmId"], "GTM-D");
    }

    #[test]
    fn clones_share_the_document() {
        let doc = SettingsDocument::from_value(json!({ "analytics": {} })).unwrap();
        let store = SettingsStore::from_document(doc);
        let other = store.clone();
        assert!(std::ptr::eq(store.document(), other.document()));
        assert!(store.source().is_none());
    }

    #[test]
    fn load_fails_for_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = SettingsStore::load(temp.path().join("nope.json")).unwrap_err();
        assert!(!err.is_schema());
    }
}
