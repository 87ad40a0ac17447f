//! [`SettingsDir`] for tests that need settings on disk.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding settings files.
///
/// # Example
///
/// ```rust,no_run
/// use storefront_test_utils::{SettingsDir, fixtures};
///
/// let dir = SettingsDir::new();
/// let path = dir.write_json("settings.json", &fixtures::minimal_settings());
/// assert!(path.exists());
/// ```
pub struct SettingsDir {
    temp_dir: TempDir,
}

impl Default for SettingsDir {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `value` as pretty JSON and return the file path.
    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        let content = serde_json::to_string_pretty(value).unwrap();
        self.write_raw(name, &content)
    }

    /// Write raw text (any format, or deliberately broken content).
    pub fn write_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("SettingsDir: failed to write {}: {}", path.display(), e));
        path
    }
}
