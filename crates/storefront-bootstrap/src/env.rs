//! Build environment
//!
//! The process environment is read once into a [`BuildEnv`] at startup and
//! passed down explicitly. Nothing later in the pipeline looks at
//! environment variables.

use serde_json::Value;
use storefront_projectors::{BuildProfile, EditorMode, ProjectionContext};
use storefront_settings::OverrideSet;

pub const PROFILE_VAR: &str = "STOREFRONT_ENV";
pub const EDITOR_VAR: &str = "STOREFRONT_EDITOR";
pub const STORE_ID_VAR: &str = "STOREFRONT_STORE_ID";
pub const PUBLIC_KEY_VAR: &str = "STOREFRONT_PUBLIC_KEY";
pub const STORE_URL_VAR: &str = "STOREFRONT_STORE_URL";

/// Prefix of generic leaf overrides, e.g. `STOREFRONT_SETTING__colors__accent`
pub const SETTING_PREFIX: &str = "STOREFRONT_SETTING__";

const PATH_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEnv {
    pub profile: BuildProfile,
    pub editor_mode: EditorMode,
    pub store_id: Option<String>,
    pub public_key: Option<String>,
    pub store_url: Option<String>,
    /// Generic overrides as (path, raw value), sorted by path
    pub settings: Vec<(Vec<String>, String)>,
}

impl BuildEnv {
    /// Snapshot the current process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build from explicit `(name, value)` pairs. Unrelated names are ignored
    /// and empty values count as unset.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut env = Self::default();
        for (name, value) in vars {
            let name = name.as_ref();
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }

            match name {
                PROFILE_VAR => env.profile = BuildProfile::from_env_value(value),
                EDITOR_VAR => env.editor_mode = EditorMode::new(is_truthy(value)),
                STORE_ID_VAR => env.store_id = Some(value.to_string()),
                PUBLIC_KEY_VAR => env.public_key = Some(value.to_string()),
                STORE_URL_VAR => env.store_url = Some(value.to_string()),
                _ => {
                    if let Some(path) = name.strip_prefix(SETTING_PREFIX) {
                        let segments: Vec<String> = path
                            .split(PATH_SEPARATOR)
                            .filter(|s| !s.is_empty())
                            .map(str::to_string)
                            .collect();
                        if segments.is_empty() {
                            tracing::debug!(name, "Ignoring setting override without a path");
                        } else {
                            env.settings.push((segments, value.to_string()));
                        }
                    }
                }
            }
        }
        env.settings.sort();
        env
    }

    pub fn with_profile(mut self, profile: BuildProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_editor_mode(mut self, editor_mode: EditorMode) -> Self {
        self.editor_mode = editor_mode;
        self
    }

    pub fn context(&self) -> ProjectionContext {
        ProjectionContext::new(self.editor_mode, self.profile)
    }

    /// The environment's contribution to the override layers.
    ///
    /// Dedicated store variables win over a generic override of the same leaf.
    pub fn to_overrides(&self) -> OverrideSet {
        let mut overrides = OverrideSet::new();
        for (path, raw) in &self.settings {
            overrides.set(&path.join("."), parse_value(raw));
        }
        let store = [
            ("store.id", &self.store_id),
            ("store.publicKey", &self.public_key),
            ("store.url", &self.store_url),
        ];
        for (path, value) in store {
            if let Some(value) = value {
                overrides.set(path, Value::String(value.clone()));
            }
        }
        overrides
    }
}

fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// JSON when it parses (`true`, `12`, `["a"]`), a plain string otherwise.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
