//! Settings documents as JSON values.

use serde_json::{Value, json};
use std::path::PathBuf;

/// The smallest valid document: only the required `analytics` namespace.
pub fn minimal_settings() -> Value {
    json!({ "analytics": { "gtmId": "" } })
}

/// A complete storefront document exercising every namespace.
pub fn storefront_settings() -> Value {
    json!({
        "version": 1,
        "store": {
            "id": "origin-demo",
            "name": "Origin Demo",
            "url": "https://origin-demo.example.com",
            "publicKey": "pk_demo",
            "assetHost": "cdn.schema.io"
        },
        "colors": {
            "accent": "#1f2937",
            "primary": "#111827",
            "background": "#ffffff"
        },
        "analytics": { "gtmId": "" },
        "locales": {
            "list": [
                { "code": "en", "name": "English", "iso": "en-US" },
                { "code": "fr", "name": "Français", "iso": "fr-FR" },
                { "code": "fr-CA", "name": "Français (Canada)", "enabled": false },
                { "code": "de", "name": "Deutsch", "iso": "de-DE" }
            ]
        },
        "typography": {
            "display": "swap",
            "heading": "google:Playfair Display:400,700",
            "body": { "family": "Inter", "weights": [400, 600] },
            "accent": "Inter:700"
        }
    })
}

/// A document whose typography holds a number where a family name belongs.
pub fn malformed_typography_settings() -> Value {
    json!({
        "colors": { "accent": "#000" },
        "analytics": { "gtmId": "" },
        "typography": { "body": { "family": 42, "weights": [400] } }
    })
}

/// Path to the workspace `test-fixtures/settings` directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/settings")
}
