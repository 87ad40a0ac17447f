//! Page-transition progress bar configuration

use serde::Serialize;
use storefront_settings::SettingsModel;

use crate::context::ProjectionContext;
use crate::module::ModuleName;
use crate::projector::Projector;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub continuous: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadingProjector;

impl Projector for LoadingProjector {
    type Output = LoadingConfig;

    fn module(&self) -> ModuleName {
        ModuleName::Loading
    }

    fn project(&self, model: &SettingsModel, _ctx: &ProjectionContext) -> LoadingConfig {
        LoadingConfig {
            color: model.colors().accent,
            continuous: true,
        }
    }
}
