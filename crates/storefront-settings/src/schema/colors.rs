//! `colors` namespace

use serde_json::{Map, Value};

use super::string_field;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSettings {
    /// Theme accent color, used for the progress bar
    pub accent: Option<String>,
}

impl ColorSettings {
    pub(crate) fn from_namespace(map: &Map<String, Value>) -> Self {
        Self {
            accent: string_field(map, "accent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accent_must_be_a_string() {
        let valid = json!({ "accent": " #000 ", "primary": "#111" });
        let invalid = json!({ "accent": 12 });

        let valid = ColorSettings::from_namespace(valid.as_object().unwrap());
        let invalid = ColorSettings::from_namespace(invalid.as_object().unwrap());

        assert_eq!(valid.accent.as_deref(), Some("#000"));
        assert_eq!(invalid.accent, None);
    }
}
