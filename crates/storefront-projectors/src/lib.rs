//! Derived module configurations
//!
//! Each downstream module of the storefront gets its configuration from a
//! [`Projector`]: a pure, total function of the resolved
//! [`SettingsModel`](storefront_settings::SettingsModel) and a
//! [`ProjectionContext`].
//!
//! ```
//! use serde_json::json;
//! use storefront_projectors::{AnalyticsProjector, BuildProfile, EditorMode, ProjectionContext, Projector};
//! use storefront_settings::{OverrideSet, SettingsDocument, resolve};
//!
//! let doc = SettingsDocument::from_value(json!({ "analytics": { "gtmId": "GTM-1" } })).unwrap();
//! let model = resolve(&doc, &OverrideSet::new()).unwrap();
//! let ctx = ProjectionContext::new(EditorMode::DISABLED, BuildProfile::Production);
//!
//! assert!(AnalyticsProjector.project(&model, &ctx).enabled);
//! ```

pub mod analytics;
pub mod cache;
pub mod commerce;
pub mod context;
pub mod editor;
pub mod fonts;
pub mod i18n;
pub mod loading;
pub mod module;
pub mod projector;

pub use analytics::{AnalyticsConfig, AnalyticsProjector};
pub use cache::{CacheConfig, CacheProjector};
pub use commerce::{CommerceConfig, CommerceProjector};
pub use context::{BuildProfile, EditorMode, ProjectionContext};
pub use editor::{EditorConfig, EditorProjector};
pub use fonts::{FontConfig, FontFamily, FontProjector};
pub use i18n::{I18nConfig, I18nProjector, LocaleRoute};
pub use loading::{LoadingConfig, LoadingProjector};
pub use module::{ModuleConfig, ModuleName, UnknownModule};
pub use projector::Projector;

use storefront_settings::SettingsModel;

/// Project every module in initialization order.
pub fn project_all(model: &SettingsModel, ctx: &ProjectionContext) -> Vec<ModuleConfig> {
    ModuleName::ALL
        .into_iter()
        .map(|module| project_module(module, model, ctx))
        .collect()
}

/// Project a single module by name.
pub fn project_module(
    module: ModuleName,
    model: &SettingsModel,
    ctx: &ProjectionContext,
) -> ModuleConfig {
    match module {
        ModuleName::Loading => LoadingProjector.project_module(model, ctx),
        ModuleName::Analytics => AnalyticsProjector.project_module(model, ctx),
        ModuleName::I18n => I18nProjector.project_module(model, ctx),
        ModuleName::Fonts => FontProjector.project_module(model, ctx),
        ModuleName::Editor => EditorProjector.project_module(model, ctx),
        ModuleName::Commerce => CommerceProjector.project_module(model, ctx),
        ModuleName::Cache => CacheProjector.project_module(model, ctx),
    }
}
