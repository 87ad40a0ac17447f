//! `typography` namespace
//!
//! Each key except `display` names a font role. A role holds one entry or a
//! list of entries, and an entry is either shorthand or an object:
//!
//! ```json
//! "typography": {
//!   "display": "swap",
//!   "heading": "google:Playfair Display:400,700",
//!   "body": { "family": "Inter", "weights": [400, "600"] }
//! }
//! ```

use serde_json::{Map, Value};

use super::{non_empty_str, string_field};

/// Font providers accepted as a shorthand prefix (`google:Inter:400`)
const PROVIDERS: [&str; 3] = ["google", "bunny", "custom"];

/// Key holding the `font-display` strategy rather than a role
const DISPLAY_KEY: &str = "display";

/// One font family request as written in the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub role: String,
    pub family: String,
    /// Parsed weights; empty when none were given or none were valid
    pub weights: Vec<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypographySettings {
    pub display: Option<String>,
    /// Font requests ordered by role name, then by position within the role
    pub fonts: Vec<FontSpec>,
}

impl TypographySettings {
    pub(crate) fn from_namespace(map: &Map<String, Value>) -> Self {
        let mut roles: Vec<(&String, &Value)> = map
            .iter()
            .filter(|(key, _)| key.as_str() != DISPLAY_KEY)
            .collect();
        roles.sort_by(|a, b| a.0.cmp(b.0));

        let mut fonts = Vec::new();
        for (role, value) in roles {
            match value {
                Value::Array(entries) => {
                    fonts.extend(entries.iter().filter_map(|e| parse_entry(role, e)));
                }
                other => fonts.extend(parse_entry(role, other)),
            }
        }

        Self {
            display: string_field(map, DISPLAY_KEY),
            fonts,
        }
    }
}

fn parse_entry(role: &str, value: &Value) -> Option<FontSpec> {
    let (family, weights) = match value {
        Value::String(shorthand) => parse_shorthand(shorthand)?,
        Value::Object(map) => {
            let family = map.get("family").and_then(non_empty_str)?;
            let weights = match map.get("weights") {
                Some(Value::Array(list)) => list.iter().filter_map(parse_weight).collect(),
                Some(single) => parse_weight(single).into_iter().collect(),
                None => Vec::new(),
            };
            (family, weights)
        }
        _ => return None,
    };

    Some(FontSpec {
        role: role.to_string(),
        family,
        weights,
    })
}

/// `[provider:]Family[:w1,w2]`
fn parse_shorthand(shorthand: &str) -> Option<(String, Vec<u16>)> {
    let mut rest = shorthand.trim();
    if let Some((prefix, tail)) = rest.split_once(':') {
        if PROVIDERS.contains(&prefix.trim().to_lowercase().as_str()) {
            rest = tail;
        }
    }

    let (family, weights) = match rest.split_once(':') {
        Some((family, weights)) => (family, weights),
        None => (rest, ""),
    };
    let family = family.trim();
    if family.is_empty() {
        return None;
    }

    let weights = weights
        .split(',')
        .filter_map(|w| parse_weight(&Value::String(w.to_string())))
        .collect();
    Some((family.to_string(), weights))
}

fn parse_weight(value: &Value) -> Option<u16> {
    let weight = match value {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "regular" | "normal" => 400,
            "bold" => 700,
            other => other.parse().ok()?,
        },
        _ => return None,
    };
    if (1..=1000).contains(&weight) {
        u16::try_from(weight).ok()
    } else {
        None
    }
}
