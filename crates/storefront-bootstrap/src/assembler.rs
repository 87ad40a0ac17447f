//! Bootstrap sequencing: overrides, resolution, projection

use std::time::Duration;

use storefront_projectors::{ProjectionContext, project_all};
use storefront_settings::{OverrideSet, SettingsModel, SettingsStore, resolve};

use crate::bundle::{ConfigBundle, Degradation};
use crate::env::BuildEnv;
use crate::error::{Error, FetchError, Result};
use crate::preview::PreviewSource;

/// How long a preview source may take before it is abandoned.
pub const DEFAULT_PREVIEW_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the [`ConfigBundle`] for one storefront bootstrap.
///
/// Override layers, later wins: base document, preview source (editor mode
/// only), environment. The layers are resolved against the base exactly once
/// and every projector then reads that one model, so the commerce module
/// always sees preview values the editor module provided.
pub struct Assembler {
    store: SettingsStore,
    env: BuildEnv,
    preview: Option<Box<dyn PreviewSource>>,
    timeout: Duration,
}

impl Assembler {
    pub fn new(store: SettingsStore, env: BuildEnv) -> Self {
        Self {
            store,
            env,
            preview: None,
            timeout: DEFAULT_PREVIEW_TIMEOUT,
        }
    }

    pub fn with_preview_source(mut self, source: impl PreviewSource + 'static) -> Self {
        self.preview = Some(Box::new(source));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn context(&self) -> ProjectionContext {
        self.env.context()
    }

    /// Gather overrides and resolve them into the settings model.
    pub async fn resolve(&self) -> Result<(SettingsModel, Vec<Degradation>)> {
        let ctx = self.context();
        if ctx.editor_mode.is_enabled() {
            tracing::info!("Editor mode enabled");
        }

        let mut degradations = Vec::new();
        let mut overrides = OverrideSet::new();
        if let Some(preview) = self.preview_overrides(&ctx, &mut degradations).await? {
            overrides.layer(&preview);
        }
        overrides.layer(&self.env.to_overrides());

        let model = resolve(self.store.document(), &overrides)?;
        Ok((model, degradations))
    }

    /// Run the whole bootstrap. Any error means no configuration at all.
    pub async fn assemble(&self) -> Result<ConfigBundle> {
        let (model, degradations) = self.resolve().await?;
        let modules = project_all(&model, &self.context());
        tracing::debug!(
            modules = modules.len(),
            degraded = !degradations.is_empty(),
            "Assembled configuration bundle"
        );
        Ok(ConfigBundle::new(modules, degradations))
    }

    async fn preview_overrides(
        &self,
        ctx: &ProjectionContext,
        degradations: &mut Vec<Degradation>,
    ) -> Result<Option<OverrideSet>> {
        let Some(source) = self.preview.as_deref() else {
            return Ok(None);
        };
        if !ctx.editor_mode.is_enabled() {
            tracing::debug!(
                source = source.name(),
                "Editor mode is off, skipping preview source"
            );
            return Ok(None);
        }

        match self.fetch(source).await {
            Ok(overrides) => Ok(Some(overrides)),
            Err(reason) if source.essential() => Err(Error::EssentialSourceUnavailable {
                source_name: source.name().to_string(),
                reason,
            }),
            Err(reason) => {
                tracing::warn!(
                    source = source.name(),
                    "Falling back to base settings: {}",
                    reason
                );
                degradations.push(Degradation {
                    source_name: source.name().to_string(),
                    reason: reason.to_string(),
                });
                Ok(None)
            }
        }
    }

    async fn fetch(&self, source: &dyn PreviewSource) -> std::result::Result<OverrideSet, FetchError> {
        match tokio::time::timeout(self.timeout, source.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                source_name: source.name().to_string(),
                timeout: self.timeout,
            }),
        }
    }
}
