//! Error types for storefront-settings

use std::path::PathBuf;

/// Result type for storefront-settings operations
pub type Result<T> = std::result::Result<T, Error>;

/// A settings document that does not match the schema the pipeline understands.
///
/// Always fatal: a storefront must not boot with half-formed settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Settings document must be a mapping, found {found}")]
    NotAMapping { found: &'static str },

    #[error("Settings document is missing required namespace '{namespace}'")]
    MissingNamespace { namespace: &'static str },

    #[error("Settings namespace '{namespace}' must be a mapping, found {found}")]
    NamespaceNotAMapping {
        namespace: &'static str,
        found: &'static str,
    },

    #[error("Settings schema version {found} is not supported (max {supported})")]
    UnsupportedVersion { found: u64, supported: u64 },

    #[error("Settings schema version must be a positive integer, found {found}")]
    InvalidVersion { found: String },
}

/// Errors that can occur while loading or resolving settings
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed settings, see [`SchemaError`]
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} settings at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported settings format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Settings file too large: {path} is {size} bytes (max {max})")]
    ConfigTooLarge { path: PathBuf, size: u64, max: u64 },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the settings themselves are malformed.
    ///
    /// Parse failures count: an unparsable file is as unusable as one with a
    /// missing namespace. I/O errors do not.
    pub fn is_schema(&self) -> bool {
        matches!(
            self,
            Error::Schema(_) | Error::ConfigParse { .. } | Error::UnsupportedFormat { .. }
        )
    }
}

/// Short type name of a JSON value, used in error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_errors_are_schema_class() {
        let err = Error::from(SchemaError::MissingNamespace {
            namespace: "analytics",
        });
        assert!(err.is_schema());
        assert!(err.to_string().contains("analytics"));
    }

    #[test]
    fn io_errors_are_not_schema_class() {
        let err = Error::io(
            "/missing/settings.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(!err.is_schema());
        assert!(err.to_string().contains("/missing/settings.json"));
    }
}
