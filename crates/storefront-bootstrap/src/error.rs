//! Error types for storefront-bootstrap

use std::time::Duration;

pub type Result<T> = std::result::Result<T, Error>;

/// A preview source that could not deliver overrides.
///
/// Recoverable unless the source is essential.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Preview source '{source_name}' timed out after {}ms", .timeout.as_millis())]
    Timeout {
        source_name: String,
        timeout: Duration,
    },

    #[error("Preview source '{source_name}' is unavailable: {reason}")]
    Unavailable { source_name: String, reason: String },

    #[error("Preview source '{source_name}' returned invalid settings: {reason}")]
    Invalid { source_name: String, reason: String },
}

impl FetchError {
    pub fn source_name(&self) -> &str {
        match self {
            FetchError::Timeout { source_name, .. }
            | FetchError::Unavailable { source_name, .. }
            | FetchError::Invalid { source_name, .. } => source_name,
        }
    }
}

/// Fatal bootstrap errors. No bundle is produced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Settings(#[from] storefront_settings::Error),

    #[error("Essential preview source '{source_name}' failed: {reason}")]
    EssentialSourceUnavailable {
        source_name: String,
        #[source]
        reason: FetchError,
    },
}

impl Error {
    /// Whether the bootstrap stopped because its settings are unusable.
    pub fn is_schema(&self) -> bool {
        match self {
            Error::Settings(e) => e.is_schema(),
            Error::EssentialSourceUnavailable { .. } => true,
        }
    }
}

impl From<storefront_settings::SchemaError> for Error {
    fn from(e: storefront_settings::SchemaError) -> Self {
        Error::Settings(e.into())
    }
}
