//! The projector capability

use serde::Serialize;
use storefront_settings::SettingsModel;

use crate::context::ProjectionContext;
use crate::module::{ModuleConfig, ModuleName};

/// Maps a resolved [`SettingsModel`] to one module's configuration.
///
/// Projectors are total: any model yields a valid output. Malformed leaves
/// are normalized to the empty/default case instead of failing, and nothing
/// is kept between calls.
pub trait Projector {
    type Output: Serialize + Into<ModuleConfig>;

    /// The module this projector configures.
    fn module(&self) -> ModuleName;

    fn project(&self, model: &SettingsModel, ctx: &ProjectionContext) -> Self::Output;

    /// Project and wrap the result for a bundle.
    fn project_module(&self, model: &SettingsModel, ctx: &ProjectionContext) -> ModuleConfig {
        tracing::trace!(module = %self.module(), "Projecting module configuration");
        self.project(model, ctx).into()
    }
}
