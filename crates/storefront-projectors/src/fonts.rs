//! Stylesheet-loader configuration from the `typography` namespace

use std::collections::BTreeSet;

use serde::Serialize;
use storefront_settings::SettingsModel;

use crate::context::ProjectionContext;
use crate::module::ModuleName;
use crate::projector::Projector;

pub const DEFAULT_WEIGHT: u16 = 400;
pub const DEFAULT_DISPLAY: &str = "swap";

const DISPLAY_VALUES: [&str; 5] = ["auto", "block", "swap", "fallback", "optional"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontFamily {
    pub family: String,
    pub weights: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontConfig {
    pub families: Vec<FontFamily>,
    pub display: String,
    pub preconnect: bool,
}

impl FontConfig {
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FontProjector;

impl Projector for FontProjector {
    type Output = FontConfig;

    fn module(&self) -> ModuleName {
        ModuleName::Fonts
    }

    fn project(&self, model: &SettingsModel, _ctx: &ProjectionContext) -> FontConfig {
        let typography = model.typography();

        // (lowercased key, display spelling, weights)
        let mut merged: Vec<(String, String, BTreeSet<u16>)> = Vec::new();
        for spec in &typography.fonts {
            let family = spec.family.trim();
            if family.is_empty() {
                continue;
            }
            let key = family.to_lowercase();
            let weights: Vec<u16> = if spec.weights.is_empty() {
                vec![DEFAULT_WEIGHT]
            } else {
                spec.weights.clone()
            };

            match merged.iter_mut().find(|(k, _, _)| *k == key) {
                Some((_, _, existing)) => existing.extend(weights),
                None => merged.push((key, family.to_string(), weights.into_iter().collect())),
            }
        }

        let families: Vec<FontFamily> = merged
            .into_iter()
            .map(|(_, family, weights)| FontFamily {
                family,
                weights: weights.into_iter().collect(),
            })
            .collect();

        let font_display = typography
            .display
            .map(|d| d.to_lowercase())
            .filter(|d| DISPLAY_VALUES.contains(&d.as_str()))
            .unwrap_or_else(|| DEFAULT_DISPLAY.to_string());

        tracing::debug!(
            families = families.len(),
            display = %font_display,
            "Projected font configuration"
        );

        FontConfig {
            preconnect: !families.is_empty(),
            families,
            display: font_display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use storefront_settings::{OverrideSet, SettingsDocument, resolve};

    fn project(typography: serde_json::Value) -> FontConfig {
        let doc = SettingsDocument::from_value(json!({
            "analytics": {},
            "typography": typography,
        }))
        .unwrap();
        let model = resolve(&doc, &OverrideSet::new()).unwrap();
        FontProjector.project(&model, &ProjectionContext::default())
    }

    fn family(name: &str, weights: &[u16]) -> FontFamily {
        FontFamily {
            family: name.to_string(),
            weights: weights.to_vec(),
        }
    }

    #[test]
    fn unions_weights_of_repeated_family() {
        let config = project(json!({
            "heading": { "family": "Inter", "weights": [700, 400] },
            "body": { "family": "inter ", "weights": [400, 300] },
        }));
        // `body` sorts before `heading`, so its spelling wins.
        assert_eq!(config.families, vec![family("inter", &[300, 400, 700])]);
        assert!(config.preconnect);
    }

    #[test]
    fn missing_weights_default_to_regular() {
        let config = project(json!({ "body": { "family": "Lora" } }));
        assert_eq!(config.families, vec![family("Lora", &[400])]);
    }

    #[test]
    fn shorthand_provider_prefix_is_stripped() {
        let config = project(json!({ "body": "google:Roboto:300,700" }));
        assert_eq!(config.families, vec![family("Roboto", &[300, 700])]);
    }

    #[test]
    fn malformed_family_yields_empty_config() {
        let config = project(json!({ "body": { "family": 42 } }));
        assert!(config.is_empty());
        assert!(!config.preconnect);
        assert_eq!(config.display, "swap");
    }

    #[test]
    fn empty_namespace_yields_empty_config() {
        let doc = SettingsDocument::from_value(json!({ "analytics": {} })).unwrap();
        let model = resolve(&doc, &OverrideSet::new()).unwrap();
        let config = FontProjector.project(&model, &ProjectionContext::default());
        assert!(config.is_empty());
    }

    #[test]
    fn unknown_display_falls_back_to_swap() {
        assert_eq!(project(json!({ "display": "OPTIONAL" })).display, "optional");
        assert_eq!(project(json!({ "display": "sometimes" })).display, "swap");
    }

    #[test]
    fn projection_is_idempotent() {
        let doc = SettingsDocument::from_value(storefront_test_utils::fixtures::storefront_settings()).unwrap();
        let model = resolve(&doc, &OverrideSet::new()).unwrap();
        let ctx = ProjectionContext::default();
        let first = FontProjector.project(&model, &ctx);
        let second = FontProjector.project(&model, &ctx);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
