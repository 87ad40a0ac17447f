//! Typed, lenient views over the settings namespaces
//!
//! Each view reads its namespace with explicit optional-field access. A
//! leaf of the wrong type reads as absent rather than failing: malformed
//! inner data is the projectors' problem to normalize, not a schema error.

pub mod analytics;
pub mod colors;
pub mod locales;
pub mod store;
pub mod typography;

pub use analytics::AnalyticsSettings;
pub use colors::ColorSettings;
pub use locales::{LocaleEntry, LocaleSettings};
pub use store::StoreSettings;
pub use typography::{FontSpec, TypographySettings};

use serde_json::{Map, Value};

/// A trimmed, non-empty string leaf.
pub(crate) fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    non_empty_str(map.get(key)?)
}

pub(crate) fn bool_field(map: &Map<String, Value>, key: &str) -> Option<bool> {
    map.get(key).and_then(Value::as_bool)
}

pub(crate) fn non_empty_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
