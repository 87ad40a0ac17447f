//! Editor-settings module configuration

use serde::Serialize;
use storefront_settings::SettingsModel;

use crate::context::ProjectionContext;
use crate::module::ModuleName;
use crate::projector::Projector;

/// Whether the module merges editor-provided settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    pub use_editor_settings: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EditorProjector;

impl Projector for EditorProjector {
    type Output = EditorConfig;

    fn module(&self) -> ModuleName {
        ModuleName::Editor
    }

    fn project(&self, _model: &SettingsModel, ctx: &ProjectionContext) -> EditorConfig {
        EditorConfig {
            use_editor_settings: ctx.editor_mode.is_enabled(),
        }
    }
}
