//! Offline runtime-caching allowlist

use serde::Serialize;
use storefront_settings::SettingsModel;

use crate::context::ProjectionContext;
use crate::module::ModuleName;
use crate::projector::Projector;

/// Asset host used when the store names none.
pub const DEFAULT_ASSET_HOST: &str = "https://cdn.schema.io";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheRule {
    pub url_pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheConfig {
    /// No web app manifest is generated.
    pub manifest: bool,
    pub meta: AppMeta,
    pub runtime_caching: Vec<CacheRule>,
}

impl CacheConfig {
    pub fn patterns(&self) -> Vec<&str> {
        self.runtime_caching
            .iter()
            .map(|r| r.url_pattern.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CacheProjector;

impl Projector for CacheProjector {
    type Output = CacheConfig;

    fn module(&self) -> ModuleName {
        ModuleName::Cache
    }

    fn project(&self, model: &SettingsModel, _ctx: &ProjectionContext) -> CacheConfig {
        let store = model.store();

        let mut runtime_caching: Vec<CacheRule> = Vec::new();
        for host in &store.asset_hosts {
            let Some(url_pattern) = origin_pattern(host) else {
                tracing::warn!(host, "Ignoring unusable asset host");
                continue;
            };
            if !runtime_caching.iter().any(|r| r.url_pattern == url_pattern) {
                runtime_caching.push(CacheRule { url_pattern });
            }
        }
        if runtime_caching.is_empty() {
            runtime_caching.push(CacheRule {
                url_pattern: format!("{DEFAULT_ASSET_HOST}/*"),
            });
        }

        CacheConfig {
            manifest: false,
            meta: AppMeta { name: store.name },
            runtime_caching,
        }
    }
}

/// Normalize a host to an `<origin>/*` pattern.
fn origin_pattern(host: &str) -> Option<String> {
    let host = host.trim();
    let (scheme, rest) = host.split_once("://").unwrap_or(("https", host));
    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('*');
    if scheme.is_empty() || authority.is_empty() || authority.chars().any(char::is_whitespace) {
        return None;
    }
    Some(format!("{scheme}://{authority}/*"))
}
