//! Process-wide flags the projectors read

use std::fmt;

/// Whether the storefront runs inside the embedded editor.
///
/// Fixed at process start and copied into every projection; there is no way
/// to flip it on an existing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EditorMode(bool);

impl EditorMode {
    pub const ENABLED: Self = Self(true);
    pub const DISABLED: Self = Self(false);

    pub const fn new(enabled: bool) -> Self {
        Self(enabled)
    }

    pub const fn is_enabled(self) -> bool {
        self.0
    }
}

/// Build profile of the running storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildProfile {
    Production,
    #[default]
    Development,
}

impl BuildProfile {
    /// Interpret an environment value: only `production` selects production.
    pub fn from_env_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Development => write!(f, "development"),
        }
    }
}

/// Everything besides the settings model that a projector may read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectionContext {
    pub editor_mode: EditorMode,
    pub profile: BuildProfile,
}

impl ProjectionContext {
    pub fn new(editor_mode: EditorMode, profile: BuildProfile) -> Self {
        Self {
            editor_mode,
            profile,
        }
    }
}
