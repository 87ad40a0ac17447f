//! The canonical, resolved settings model

use serde::Serialize;
use serde_json::{Map, Value};

use crate::document::SettingsDocument;
use crate::schema::{
    AnalyticsSettings, ColorSettings, LocaleSettings, StoreSettings, TypographySettings,
};
use crate::validation::{ANALYTICS, COLORS, LOCALES, STORE, TYPOGRAPHY};

/// Settings after overrides have been merged over the base document.
///
/// Produced only by [`crate::resolve`]. Projectors read it through the typed
/// namespace views rather than by walking string paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SettingsModel {
    root: Map<String, Value>,
}

impl SettingsModel {
    pub(crate) fn new(root: Map<String, Value>) -> Self {
        Self { root }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    pub fn namespace(&self, name: &str) -> Option<&Map<String, Value>> {
        self.root.get(name).and_then(Value::as_object)
    }

    pub fn store(&self) -> StoreSettings {
        StoreSettings::from_namespace(self.ns(STORE))
    }

    pub fn colors(&self) -> ColorSettings {
        ColorSettings::from_namespace(self.ns(COLORS))
    }

    pub fn analytics(&self) -> AnalyticsSettings {
        AnalyticsSettings::from_namespace(self.ns(ANALYTICS))
    }

    pub fn locales(&self) -> LocaleSettings {
        LocaleSettings::from_namespace(self.ns(LOCALES))
    }

    pub fn typography(&self) -> TypographySettings {
        TypographySettings::from_namespace(self.ns(TYPOGRAPHY))
    }

    fn ns(&self, name: &str) -> &Map<String, Value> {
        static EMPTY: std::sync::OnceLock<Map<String, Value>> = std::sync::OnceLock::new();
        self.namespace(name)
            .unwrap_or_else(|| EMPTY.get_or_init(Map::new))
    }
}

impl PartialEq<SettingsDocument> for SettingsModel {
    fn eq(&self, other: &SettingsDocument) -> bool {
        &self.root == other.as_map()
    }
}
