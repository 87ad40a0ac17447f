//! Downstream module names and their configuration values

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::analytics::AnalyticsConfig;
use crate::cache::CacheConfig;
use crate::commerce::CommerceConfig;
use crate::editor::EditorConfig;
use crate::fonts::FontConfig;
use crate::i18n::I18nConfig;
use crate::loading::LoadingConfig;

/// A downstream module that consumes a derived configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleName {
    Loading,
    Analytics,
    I18n,
    Fonts,
    Editor,
    Commerce,
    Cache,
}

impl ModuleName {
    /// Every module, in the order the framework initializes them.
    ///
    /// `Editor` must stay ahead of `Commerce`: the commerce SDK reads the
    /// settings the editor module merged in.
    pub const ALL: [ModuleName; 7] = [
        ModuleName::Loading,
        ModuleName::Analytics,
        ModuleName::I18n,
        ModuleName::Fonts,
        ModuleName::Editor,
        ModuleName::Commerce,
        ModuleName::Cache,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModuleName::Loading => "loading",
            ModuleName::Analytics => "analytics",
            ModuleName::I18n => "i18n",
            ModuleName::Fonts => "fonts",
            ModuleName::Editor => "editor",
            ModuleName::Commerce => "commerce",
            ModuleName::Cache => "cache",
        }
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown module: {name}")]
pub struct UnknownModule {
    pub name: String,
}

impl FromStr for ModuleName {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleName::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownModule {
                name: s.to_string(),
            })
    }
}

/// The configuration handed to one downstream module.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModuleConfig {
    Loading(LoadingConfig),
    Analytics(AnalyticsConfig),
    I18n(I18nConfig),
    Fonts(FontConfig),
    Editor(EditorConfig),
    Commerce(CommerceConfig),
    Cache(CacheConfig),
}

impl ModuleConfig {
    pub fn module(&self) -> ModuleName {
        match self {
            ModuleConfig::Loading(_) => ModuleName::Loading,
            ModuleConfig::Analytics(_) => ModuleName::Analytics,
            ModuleConfig::I18n(_) => ModuleName::I18n,
            ModuleConfig::Fonts(_) => ModuleName::Fonts,
            ModuleConfig::Editor(_) => ModuleName::Editor,
            ModuleConfig::Commerce(_) => ModuleName::Commerce,
            ModuleConfig::Cache(_) => ModuleName::Cache,
        }
    }
}

macro_rules! impl_from_config {
    ($($variant:ident => $config:ty),* $(,)?) => {
        $(
            impl From<$config> for ModuleConfig {
                fn from(config: $config) -> Self {
                    ModuleConfig::$variant(config)
                }
            }
        )*
    };
}

impl_from_config! {
    Loading => LoadingConfig,
    Analytics => AnalyticsConfig,
    I18n => I18nConfig,
    Fonts => FontConfig,
    Editor => EditorConfig,
    Commerce => CommerceConfig,
    Cache => CacheConfig,
}
