//! The configuration bundle handed to the framework

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use storefront_projectors::{
    AnalyticsConfig, CacheConfig, CommerceConfig, EditorConfig, FontConfig, I18nConfig,
    LoadingConfig, ModuleConfig, ModuleName,
};

/// An override source that failed without stopping the bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Degradation {
    pub source_name: String,
    pub reason: String,
}

/// Derived configuration for every module, in initialization order.
///
/// Serializes as a map keyed by module name. Keys keep initialization order
/// when written with `serde_json::to_string*`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigBundle {
    modules: Vec<ModuleConfig>,
    degradations: Vec<Degradation>,
}

macro_rules! typed_accessor {
    ($($fn_name:ident => $variant:ident($config:ty)),* $(,)?) => {
        $(
            pub fn $fn_name(&self) -> Option<&$config> {
                self.modules.iter().find_map(|m| match m {
                    ModuleConfig::$variant(config) => Some(config),
                    _ => None,
                })
            }
        )*
    };
}

impl ConfigBundle {
    pub(crate) fn new(modules: Vec<ModuleConfig>, degradations: Vec<Degradation>) -> Self {
        Self {
            modules,
            degradations,
        }
    }

    pub fn get(&self, module: ModuleName) -> Option<&ModuleConfig> {
        self.modules.iter().find(|m| m.module() == module)
    }

    pub fn module_names(&self) -> Vec<ModuleName> {
        self.modules.iter().map(ModuleConfig::module).collect()
    }

    pub fn modules(&self) -> impl Iterator<Item = (ModuleName, &ModuleConfig)> {
        self.modules.iter().map(|m| (m.module(), m))
    }

    pub fn degradations(&self) -> &[Degradation] {
        &self.degradations
    }

    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }

    typed_accessor! {
        loading => Loading(LoadingConfig),
        analytics => Analytics(AnalyticsConfig),
        i18n => I18n(I18nConfig),
        fonts => Fonts(FontConfig),
        editor => Editor(EditorConfig),
        commerce => Commerce(CommerceConfig),
        cache => Cache(CacheConfig),
    }
}

impl Serialize for ConfigBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.modules.len()))?;
        for module in &self.modules {
            map.serialize_entry(module.module().as_str(), module)?;
        }
        map.end()
    }
}
