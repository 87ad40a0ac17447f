//! Commerce SDK initialization parameters

use serde::Serialize;
use storefront_settings::SettingsModel;

use crate::context::ProjectionContext;
use crate::module::ModuleName;
use crate::projector::Projector;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommerceConfig {
    pub store_id: Option<String>,
    pub public_key: Option<String>,
    pub store_url: Option<String>,
    /// Serve draft content to the embedded editor.
    pub preview_content: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CommerceProjector;

impl Projector for CommerceProjector {
    type Output = CommerceConfig;

    fn module(&self) -> ModuleName {
        ModuleName::Commerce
    }

    fn project(&self, model: &SettingsModel, ctx: &ProjectionContext) -> CommerceConfig {
        let store = model.store();
        if store.id.is_none() {
            tracing::debug!("No store id configured for the commerce module");
        }
        CommerceConfig {
            store_id: store.id,
            public_key: store.public_key,
            store_url: store.url,
            preview_content: ctx.editor_mode.is_enabled(),
        }
    }
}
