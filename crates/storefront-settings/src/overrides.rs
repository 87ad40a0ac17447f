//! Partial overrides layered over the base settings

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{SchemaError, kind_of};

/// Partial settings sourced from the environment or a preview service.
///
/// Keys mirror the document's namespaces. A missing key, or a `null` leaf,
/// means "no override" and never "override to empty".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OverrideSet {
    root: Map<String, Value>,
}

impl OverrideSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an override set from a parsed tree. The tree must be a mapping.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            Value::Null => Ok(Self::new()),
            other => Err(SchemaError::NotAMapping {
                found: kind_of(&other),
            }),
        }
    }

    /// Set the leaf at a dotted path such as `analytics.gtmId`.
    ///
    /// Intermediate mappings are created as needed. An empty path is a no-op.
    pub fn set(&mut self, path: &str, value: Value) -> &mut Self {
        let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
        insert_path(&mut self.root, &segments, value);
        self
    }

    /// Builder form of [`OverrideSet::set`].
    pub fn with(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.set(path, value.into());
        self
    }

    /// Layer `other` on top of this set. `other` wins on conflicts.
    ///
    /// Unlike resolution against a document, layering may add keys: both
    /// sides are partial.
    pub fn layer(&mut self, other: &OverrideSet) {
        for (key, value) in &other.root {
            match self.root.get_mut(key) {
                Some(base) => deep_merge_value(base, value),
                None if !value.is_null() => {
                    self.root.insert(key.clone(), value.clone());
                }
                None => {}
            }
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Dotted paths of every non-null leaf, sorted.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaves(&self.root, &mut String::new(), &mut paths);
        paths.sort();
        paths
    }

    /// True when the set carries no effective override.
    pub fn is_empty(&self) -> bool {
        self.leaf_paths().is_empty()
    }
}

/// Deep merge two JSON values.
///
/// If both values are objects, merge them recursively with `other` taking
/// precedence. A `null` in `other` leaves `base` alone. Otherwise `other`
/// replaces `base`; arrays are replaced wholesale.
fn deep_merge_value(base: &mut Value, other: &Value) {
    match (base, other) {
        (_, Value::Null) => {}
        (Value::Object(base_map), Value::Object(other_map)) => {
            for (key, other_val) in other_map {
                if let Some(base_val) = base_map.get_mut(key) {
                    deep_merge_value(base_val, other_val);
                } else if !other_val.is_null() {
                    base_map.insert(key.clone(), other_val.clone());
                }
            }
        }
        (base, other) => {
            *base = other.clone();
        }
    }
}

fn insert_path(map: &mut Map<String, Value>, segments: &[&str], value: Value) {
    match segments {
        [] => {}
        [last] => {
            map.insert((*last).to_string(), value);
        }
        [head, rest @ ..] => {
            let slot = map
                .entry(*head)
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(child) = slot {
                insert_path(child, rest, value);
            }
        }
    }
}

fn collect_leaves(map: &Map<String, Value>, prefix: &mut String, out: &mut Vec<String>) {
    for (key, value) in map {
        let len = prefix.len();
        if !prefix.is_empty() {
            prefix.push('.');
        }
        prefix.push_str(key);
        match value {
            Value::Null => {}
            Value::Object(child) => collect_leaves(child, prefix, out),
            _ => out.push(prefix.clone()),
        }
        prefix.truncate(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn set_builds_nested_paths() {
        let set = OverrideSet::new()
            .with("store.id", "demo")
            .with("store.url", "https://demo.example")
            .with("analytics.gtmId", "GTM-1");

        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!({
                "store": { "id": "demo", "url": "https://demo.example" },
                "analytics": { "gtmId": "GTM-1" }
            })
        );
    }

    #[test]
    fn set_replaces_scalar_parents() {
        let mut set = OverrideSet::new().with("flags", true);
        set.set("flags.beta", json!(true));
        assert_eq!(set.as_map()["flags"]["beta"], true);
    }

    #[test]
    fn empty_path_is_ignored() {
        let mut set = OverrideSet::new();
        set.set("", json!(1));
        set.set("..", json!(1));
        assert!(set.is_empty());
    }

    #[test]
    fn null_leaves_are_not_overrides() {
        let set = OverrideSet::from_value(json!({ "store": { "id": null } })).unwrap();
        assert!(set.is_empty());
        assert!(set.leaf_paths().is_empty());
    }

    #[test]
    fn from_value_rejects_scalars() {
        assert!(OverrideSet::from_value(json!("store")).is_err());
        assert!(OverrideSet::from_value(json!(null)).unwrap().is_empty());
    }

    #[test]
    fn layer_later_set_wins_and_keeps_siblings() {
        let mut merged = OverrideSet::new()
            .with("store.id", "preview-store")
            .with("store.name", "Preview")
            .with("locales.list", json!(["en", "fr"]));
        let env = OverrideSet::new()
            .with("store.id", "env-store")
            .with("locales.list", json!(["de"]));

        merged.layer(&env);

        assert_eq!(merged.as_map()["store"]["id"], "env-store");
        assert_eq!(merged.as_map()["store"]["name"], "Preview");
        assert_eq!(merged.as_map()["locales"]["list"], json!(["de"]));
    }

    #[test]
    fn layer_ignores_null_from_later_set() {
        let mut base = OverrideSet::new().with("store.id", "kept");
        base.layer(&OverrideSet::from_value(json!({ "store": { "id": null } })).unwrap());
        assert_eq!(base.as_map()["store"]["id"], "kept");
    }

    #[test]
    fn leaf_paths_are_sorted() {
        let set = OverrideSet::new()
            .with("store.url", "u")
            .with("analytics.gtmId", "g")
            .with("store.id", "i");
        assert_eq!(
            set.leaf_paths(),
            vec!["analytics.gtmId", "store.id", "store.url"]
        );
    }
}
