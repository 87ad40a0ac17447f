//! Locale routing and fallback configuration
//!
//! Routing uses the prefix-except-default strategy: the default locale is
//! served at the root and every other locale under `/<code>`. Outside editor
//! mode disabled locales are not routed, the visitor's browser language is
//! detected on the root path, and SEO alternate links are emitted. In editor
//! mode every configured locale is routed so any of them can be previewed.

use std::collections::HashSet;

use serde::Serialize;
use storefront_settings::SettingsModel;
use storefront_settings::schema::LocaleEntry;

use crate::context::ProjectionContext;
use crate::module::ModuleName;
use crate::projector::Projector;

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Cookie remembering a detected language.
pub const REDIRECT_COOKIE: &str = "i18n_redirected";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingStrategy {
    PrefixExceptDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectOn {
    Root,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserLanguageDetection {
    pub use_cookie: bool,
    pub cookie_key: String,
    pub redirect_on: RedirectOn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleRoute {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso: Option<String>,
    /// Empty for the default locale, `/<code>` otherwise
    pub path_prefix: String,
    /// Locales tried in order when a message is missing
    pub fallbacks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    pub locales: Vec<LocaleRoute>,
    pub default_locale: String,
    pub fallback_locale: String,
    pub strategy: RoutingStrategy,
    pub detect_browser_language: Option<BrowserLanguageDetection>,
    pub seo: bool,
}

impl I18nConfig {
    pub fn codes(&self) -> Vec<&str> {
        self.locales.iter().map(|l| l.code.as_str()).collect()
    }

    pub fn route(&self, code: &str) -> Option<&LocaleRoute> {
        self.locales.iter().find(|l| l.code == code)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct I18nProjector;

impl Projector for I18nProjector {
    type Output = I18nConfig;

    fn module(&self) -> ModuleName {
        ModuleName::I18n
    }

    fn project(&self, model: &SettingsModel, ctx: &ProjectionContext) -> I18nConfig {
        let settings = model.locales();
        let editor = ctx.editor_mode.is_enabled();

        let mut seen = HashSet::new();
        let unique: Vec<LocaleEntry> = settings
            .entries
            .into_iter()
            .filter(|entry| seen.insert(entry.code.to_lowercase()))
            .collect();

        let mut routed: Vec<LocaleEntry> = unique
            .iter()
            .filter(|entry| editor || entry.enabled)
            .cloned()
            .collect();
        if routed.is_empty() {
            // Every locale disabled still leaves the site reachable in one.
            let first = unique
                .into_iter()
                .next()
                .unwrap_or_else(|| LocaleEntry::new(DEFAULT_LOCALE));
            routed.push(first);
        }

        let find = |code: &str| -> Option<String> {
            routed
                .iter()
                .find(|entry| entry.code.eq_ignore_ascii_case(code))
                .map(|entry| entry.code.clone())
        };

        let default_locale = match settings.default.as_deref().and_then(|d| find(d)) {
            Some(code) => code,
            None => {
                if let Some(requested) = settings.default.as_deref() {
                    tracing::warn!(
                        requested,
                        "Default locale is not routed, using the first routed locale"
                    );
                }
                routed[0].code.clone()
            }
        };

        let locales = routed
            .iter()
            .map(|entry| {
                let mut fallbacks: Vec<String> = Vec::new();
                let candidates = [
                    entry.fallback.as_deref().and_then(|f| find(f)),
                    base_language(&entry.code).and_then(|b| find(b)),
                    Some(default_locale.clone()),
                ];
                for code in candidates.into_iter().flatten() {
                    if code != entry.code && !fallbacks.contains(&code) {
                        fallbacks.push(code);
                    }
                }

                LocaleRoute {
                    path_prefix: if entry.code == default_locale {
                        String::new()
                    } else {
                        format!("/{}", entry.code)
                    },
                    code: entry.code.clone(),
                    name: entry.name.clone(),
                    iso: entry.iso.clone(),
                    fallbacks,
                }
            })
            .collect();

        let detect_browser_language = (!editor).then(|| BrowserLanguageDetection {
            use_cookie: true,
            cookie_key: REDIRECT_COOKIE.to_string(),
            redirect_on: RedirectOn::Root,
        });

        I18nConfig {
            locales,
            fallback_locale: default_locale.clone(),
            default_locale,
            strategy: RoutingStrategy::PrefixExceptDefault,
            detect_browser_language,
            seo: !editor,
        }
    }
}

/// `fr` for `fr-CA` / `fr_CA`; `None` for a bare language code.
fn base_language(code: &str) -> Option<&str> {
    code.split_once(['-', '_'])
        .map(|(base, _)| base)
        .filter(|base| !base.is_empty())
}
