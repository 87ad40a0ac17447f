//! Tag-manager configuration

use serde::Serialize;
use storefront_settings::SettingsModel;

use crate::context::ProjectionContext;
use crate::module::ModuleName;
use crate::projector::Projector;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsConfig {
    pub id: String,
    /// True only for a production build with a non-empty id.
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsProjector;

impl Projector for AnalyticsProjector {
    type Output = AnalyticsConfig;

    fn module(&self) -> ModuleName {
        ModuleName::Analytics
    }

    fn project(&self, model: &SettingsModel, ctx: &ProjectionContext) -> AnalyticsConfig {
        let id = model.analytics().gtm_id.unwrap_or_default();
        let enabled = !id.is_empty() && ctx.profile.is_production();
        if !id.is_empty() && !enabled {
            tracing::debug!(profile = %ctx.profile, "Analytics disabled outside production");
        }
        AnalyticsConfig { id, enabled }
    }
}
