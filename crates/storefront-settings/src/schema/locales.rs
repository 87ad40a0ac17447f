//! `locales` namespace
//!
//! ```json
//! "locales": {
//!   "default": "en",
//!   "list": ["en", { "code": "fr-CA", "name": "Français", "enabled": false }]
//! }
//! ```

use serde_json::{Map, Value};

use super::{bool_field, non_empty_str, string_field};

/// One configured locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    pub code: String,
    pub name: Option<String>,
    /// ISO language tag used for `hreflang`, e.g. `fr-CA`
    pub iso: Option<String>,
    /// Whether production traffic is routed to this locale
    pub enabled: bool,
    /// Explicit fallback locale code
    pub fallback: Option<String>,
}

impl LocaleEntry {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: None,
            iso: None,
            enabled: true,
            fallback: None,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) => non_empty_str(value).map(Self::new),
            Value::Object(map) => {
                let code = string_field(map, "code")?;
                Some(Self {
                    code,
                    name: string_field(map, "name"),
                    iso: string_field(map, "iso"),
                    enabled: bool_field(map, "enabled").unwrap_or(true),
                    fallback: string_field(map, "fallback"),
                })
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSettings {
    /// Entries in configured order. Entries without a usable code are dropped.
    pub entries: Vec<LocaleEntry>,
    /// Explicitly configured default locale
    pub default: Option<String>,
}

impl LocaleSettings {
    pub(crate) fn from_namespace(map: &Map<String, Value>) -> Self {
        let entries = map
            .get("list")
            .and_then(Value::as_array)
            .map(|list| list.iter().filter_map(LocaleEntry::from_value).collect())
            .unwrap_or_default();

        Self {
            entries,
            default: string_field(map, "default"),
        }
    }

    /// Configured locale codes in order.
    pub fn codes(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.code.as_str()).collect()
    }
}
