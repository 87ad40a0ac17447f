//! Override resolution with recursive deep merge
//!
//! [`resolve`] merges an [`OverrideSet`] over a [`SettingsDocument`]:
//!
//! - Mappings merge key by key, so a partial override keeps its siblings.
//! - Scalars and arrays are leaves; an override replaces them wholesale.
//!   A number or boolean replacing a string leaf is stored as its text.
//! - `null` overrides are ignored.
//! - Keys the base does not declare are ignored: overrides extend values,
//!   they do not add schema.
//! - An override that would swap a mapping for a leaf (or the reverse) is
//!   rejected with a warning.

use serde_json::{Map, Value};

use crate::Result;
use crate::document::SettingsDocument;
use crate::model::SettingsModel;
use crate::overrides::OverrideSet;
use crate::validation;

/// Leaf names whose values must never reach the logs
const SECRET_KEYS: [&str; 4] = ["publicKey", "secretKey", "apiKey", "password"];

/// What a resolution did with each override leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// `path = value` entries for overrides that changed the base
    pub applied: Vec<String>,
    /// Paths the base document does not declare
    pub ignored: Vec<String>,
    /// Paths whose override has the wrong shape
    pub rejected: Vec<String>,
}

impl MergeReport {
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.ignored.is_empty() && self.rejected.is_empty()
    }
}

/// Merge `overrides` over `base` into the canonical settings model.
///
/// # Example
///
/// ```
/// use storefront_settings::{OverrideSet, SettingsDocument, resolve};
/// use serde_json::json;
///
/// let base = SettingsDocument::from_value(json!({
///     "colors": { "accent": "#000", "text": "#111" },
///     "analytics": { "gtmId": "" }
/// })).unwrap();
/// let overrides = OverrideSet::new().with("colors.accent", "#fff");
///
/// let model = resolve(&base, &overrides).unwrap();
/// assert_eq!(model.as_map()["colors"]["accent"], "#fff");
/// assert_eq!(model.as_map()["colors"]["text"], "#111");
/// ```
pub fn resolve(base: &SettingsDocument, overrides: &OverrideSet) -> Result<SettingsModel> {
    resolve_with_report(base, overrides).map(|(model, _)| model)
}

/// Like [`resolve`], also returning what happened to each override.
pub fn resolve_with_report(
    base: &SettingsDocument,
    overrides: &OverrideSet,
) -> Result<(SettingsModel, MergeReport)> {
    let mut root = base.as_map().clone();
    let mut report = MergeReport::default();
    merge_map(&mut root, overrides.as_map(), &mut Vec::new(), &mut report);

    validation::validate_map(&root)?;

    if !report.applied.is_empty() {
        tracing::info!("Settings overrides applied: {:?}", report.applied);
    }
    for path in &report.ignored {
        tracing::debug!(%path, "Override ignored: key not declared in base settings");
    }
    for path in &report.rejected {
        tracing::warn!(%path, "Override rejected: shape does not match base settings");
    }

    Ok((SettingsModel::new(root), report))
}

fn merge_map(
    base: &mut Map<String, Value>,
    overlay: &Map<String, Value>,
    path: &mut Vec<String>,
    report: &mut MergeReport,
) {
    for (key, over) in overlay {
        path.push(key.clone());
        match base.get_mut(key) {
            Some(slot) => merge_value(slot, over, path, report),
            None if !over.is_null() => report.ignored.push(path.join(".")),
            None => {}
        }
        path.pop();
    }
}

fn merge_value(base: &mut Value, over: &Value, path: &mut Vec<String>, report: &mut MergeReport) {
    match (base, over) {
        (_, Value::Null) => {}
        (Value::Object(base_map), Value::Object(over_map)) => {
            merge_map(base_map, over_map, path, report);
        }
        (Value::Object(_), _) | (_, Value::Object(_)) => {
            report.rejected.push(path.join("."));
        }
        (slot, over) => {
            let over = match (&*slot, over) {
                (Value::String(_), Value::Number(_) | Value::Bool(_)) => {
                    Value::String(over.to_string())
                }
                _ => over.clone(),
            };
            if *slot != over {
                report.applied.push(describe_change(path, &over));
                *slot = over;
            }
        }
    }
}

fn describe_change(path: &[String], value: &Value) -> String {
    let is_secret = path
        .last()
        .is_some_and(|leaf| SECRET_KEYS.contains(&leaf.as_str()));
    if is_secret {
        format!("{} = ***", path.join("."))
    } else {
        format!("{} = {}", path.join("."), value)
    }
}
