//! End-to-end pipeline tests
//!
//! Each test runs the full flow: settings document -> overrides ->
//! resolution -> projection -> bundle.

use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use storefront_bootstrap::{Assembler, BuildEnv, Error, FetchError, FilePreviewSource, PreviewSource};
use storefront_projectors::{
    AnalyticsConfig, AnalyticsProjector, BuildProfile, EditorMode, FontProjector, ModuleName,
    ProjectionContext, Projector,
};
use storefront_settings::{OverrideSet, SettingsDocument, SettingsStore, resolve};
use storefront_test_utils::SettingsDir;
use storefront_test_utils::fixtures::{fixtures_dir, malformed_typography_settings};

fn base_document() -> SettingsDocument {
    SettingsDocument::from_value(json!({
        "colors": { "accent": "#000" },
        "analytics": { "gtmId": "" }
    }))
    .unwrap()
}

fn store_from(value: Value) -> SettingsStore {
    SettingsStore::from_document(SettingsDocument::from_value(value).unwrap())
}

/// Sleeps far longer than any test timeout.
struct SlowSource {
    essential: bool,
}

#[async_trait]
impl PreviewSource for SlowSource {
    fn name(&self) -> &str {
        "slow-editor"
    }

    fn essential(&self) -> bool {
        self.essential
    }

    async fn fetch(&self) -> Result<OverrideSet, FetchError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(OverrideSet::new().with("colors.accent", "#fff"))
    }
}

#[rstest]
#[case::production(BuildProfile::Production, true)]
#[case::development(BuildProfile::Development, false)]
fn gtm_override_reaches_analytics(#[case] profile: BuildProfile, #[case] enabled: bool) {
    let overrides = OverrideSet::from_value(json!({ "analytics": { "gtmId": "GTM-1" } })).unwrap();
    let model = resolve(&base_document(), &overrides).unwrap();
    let ctx = ProjectionContext::new(EditorMode::DISABLED, profile);

    assert_eq!(
        AnalyticsProjector.project(&model, &ctx),
        AnalyticsConfig {
            id: "GTM-1".into(),
            enabled,
        }
    );
}

#[test]
fn malformed_typography_yields_empty_font_list() {
    let doc = SettingsDocument::from_value(malformed_typography_settings()).unwrap();
    let model = resolve(&doc, &OverrideSet::new()).unwrap();

    let fonts = FontProjector.project(&model, &ProjectionContext::default());
    assert!(fonts.families.is_empty());
}

#[tokio::test]
async fn gtm_from_environment_end_to_end() {
    let env = BuildEnv::from_vars([
        ("STOREFRONT_ENV", "production"),
        ("STOREFRONT_SETTING__analytics__gtmId", "GTM-1"),
    ]);
    let bundle = Assembler::new(SettingsStore::from_document(base_document()), env)
        .assemble()
        .await
        .unwrap();

    assert_eq!(
        bundle.analytics(),
        Some(&AnalyticsConfig {
            id: "GTM-1".into(),
            enabled: true,
        })
    );
}

#[tokio::test]
async fn fixture_file_bundle() {
    let store = SettingsStore::load(fixtures_dir().join("storefront.json")).unwrap();
    let env = BuildEnv::default().with_profile(BuildProfile::Production);
    let bundle = Assembler::new(store, env).assemble().await.unwrap();

    assert_eq!(bundle.module_names(), ModuleName::ALL.to_vec());

    let i18n = bundle.i18n().unwrap();
    assert_eq!(i18n.codes(), vec!["en", "fr", "de"]);
    assert_eq!(i18n.fallback_locale, "en");

    let fonts = bundle.fonts().unwrap();
    let families: Vec<&str> = fonts.families.iter().map(|f| f.family.as_str()).collect();
    assert_eq!(families, vec!["Inter", "Playfair Display"]);

    let cache = bundle.cache().unwrap();
    assert_eq!(cache.patterns(), vec!["https://cdn.schema.io/*"]);
    assert_eq!(cache.meta.name.as_deref(), Some("Origin Demo"));
}

#[tokio::test]
async fn editor_preview_file_feeds_commerce() {
    let store = SettingsStore::load(fixtures_dir().join("storefront.json")).unwrap();
    let env = BuildEnv::from_vars([("STOREFRONT_EDITOR", "1")]);
    let bundle = Assembler::new(store, env)
        .with_preview_source(FilePreviewSource::new(fixtures_dir().join("preview.json")))
        .assemble()
        .await
        .unwrap();

    let names = bundle.module_names();
    let editor = names.iter().position(|m| *m == ModuleName::Editor).unwrap();
    let commerce = names.iter().position(|m| *m == ModuleName::Commerce).unwrap();
    assert!(editor < commerce);

    let config = bundle.commerce().unwrap();
    assert_eq!(config.store_id.as_deref(), Some("preview-store"));
    assert_eq!(config.store_url.as_deref(), Some("https://origin-demo.example.com"));
    assert!(config.preview_content);
    assert_eq!(
        bundle.cache().unwrap().meta.name.as_deref(),
        Some("Preview Storefront")
    );

    // Editor mode routes every locale and turns production-only routing off.
    assert!(bundle.i18n().unwrap().detect_browser_language.is_none());
}

#[tokio::test]
async fn slow_preview_falls_back_to_base() {
    let bundle = Assembler::new(
        SettingsStore::from_document(base_document()),
        BuildEnv::default().with_editor_mode(EditorMode::ENABLED),
    )
    .with_preview_source(SlowSource { essential: false })
    .with_timeout(Duration::from_millis(20))
    .assemble()
    .await
    .unwrap();

    assert_eq!(bundle.loading().unwrap().color.as_deref(), Some("#000"));
    assert!(bundle.is_degraded());
}

#[tokio::test]
async fn slow_essential_preview_aborts() {
    let err = Assembler::new(
        SettingsStore::from_document(base_document()),
        BuildEnv::default().with_editor_mode(EditorMode::ENABLED),
    )
    .with_preview_source(SlowSource { essential: true })
    .with_timeout(Duration::from_millis(20))
    .assemble()
    .await
    .unwrap_err();

    assert!(matches!(err, Error::EssentialSourceUnavailable { .. }));
}

#[test]
fn missing_analytics_aborts_before_bootstrap() {
    let err = SettingsStore::load(fixtures_dir().join("missing-analytics.json")).unwrap_err();
    assert!(err.is_schema());
}

#[tokio::test]
async fn schema_error_from_overrides_yields_no_bundle() {
    let env = BuildEnv::from_vars([("STOREFRONT_SETTING__version", "7")]);
    let store = store_from(json!({ "version": 1, "analytics": {} }));

    let result = Assembler::new(store, env).assemble().await;
    assert!(matches!(result, Err(ref e) if e.is_schema()));
}

#[tokio::test]
async fn yaml_document_bootstraps() {
    let dir = SettingsDir::new();
    let path = dir.write_raw(
        "settings.yaml",
        "analytics:\n  gtmId: GTM-YAML\nlocales:\n  list: [en, nl]\n",
    );
    let store = SettingsStore::load(&path).unwrap();

    let bundle = Assembler::new(store, BuildEnv::default())
        .assemble()
        .await
        .unwrap();
    assert_eq!(bundle.analytics().unwrap().id, "GTM-YAML");
    assert_eq!(bundle.i18n().unwrap().codes(), vec!["en", "nl"]);
}
