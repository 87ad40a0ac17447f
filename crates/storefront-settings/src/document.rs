//! The persisted base settings document

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{SchemaError, kind_of};
use crate::validation::{self, KNOWN_NAMESPACES};

/// Base settings for a storefront, validated against the namespace schema.
///
/// Every known namespace is present once a document is built, possibly as an
/// empty placeholder. The document is read-only after construction.
///
/// # Example
///
/// ```
/// use storefront_settings::SettingsDocument;
/// use serde_json::json;
///
/// let doc = SettingsDocument::from_value(json!({
///     "colors": { "accent": "#000" },
///     "analytics": { "gtmId": "" }
/// })).unwrap();
///
/// assert!(doc.namespace("typography").unwrap().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SettingsDocument {
    root: Map<String, Value>,
}

impl SettingsDocument {
    /// Build a document from a parsed settings tree.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        validation::validate(&value)?;
        match value {
            Value::Object(mut root) => {
                validation::fill_placeholders(&mut root);
                Ok(Self { root })
            }
            other => Err(SchemaError::NotAMapping {
                found: kind_of(&other),
            }),
        }
    }

    /// The whole document as a mapping of namespaces.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    /// A single namespace, if it is a mapping.
    pub fn namespace(&self, name: &str) -> Option<&Map<String, Value>> {
        self.root.get(name).and_then(Value::as_object)
    }

    /// Namespaces the document declares, known or not.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.root
            .iter()
            .filter(|(_, value)| value.is_object())
            .map(|(key, _)| key.as_str())
    }

    /// Known namespaces that only hold a placeholder.
    pub fn empty_namespaces(&self) -> Vec<&'static str> {
        KNOWN_NAMESPACES
            .into_iter()
            .filter(|ns| self.namespace(ns).is_some_and(Map::is_empty))
            .collect()
    }

    /// Clone the document into a plain JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.root.clone())
    }
}

impl TryFrom<Value> for SettingsDocument {
    type Error = SchemaError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}
