//! Settings document, overrides and resolution for the storefront theme.
//!
//! This crate owns the data side of the pipeline:
//!
//! - [`SettingsDocument`]: the persisted base settings, validated against the
//!   namespace schema (`store`, `colors`, `analytics`, `locales`, `typography`)
//! - [`SettingsStore`]: loads a document once and shares it read-only
//! - [`OverrideSet`]: partial overrides from the environment or a preview source
//! - [`resolve`]: deep-merges overrides over the document into a [`SettingsModel`]
//! - [`schema`]: typed, lenient views over each namespace of the model

pub mod document;
pub mod error;
pub mod loader;
pub mod model;
pub mod overrides;
pub mod resolver;
pub mod schema;
pub mod store;
pub mod validation;

pub use document::SettingsDocument;
pub use error::{Error, Result, SchemaError};
pub use loader::{SettingsFormat, load_document, parse_document};
pub use model::SettingsModel;
pub use overrides::OverrideSet;
pub use resolver::{MergeReport, resolve, resolve_with_report};
pub use store::SettingsStore;
