//! Schema validation for settings documents
//!
//! A document is a mapping of namespaces. The namespaces listed in
//! [`KNOWN_NAMESPACES`] are understood by the pipeline. Only the ones in
//! [`REQUIRED_NAMESPACES`] must be present in the file; the rest are filled
//! with empty placeholders when a document is built.

use serde_json::{Map, Value};

use crate::error::{SchemaError, kind_of};

pub const STORE: &str = "store";
pub const COLORS: &str = "colors";
pub const ANALYTICS: &str = "analytics";
pub const LOCALES: &str = "locales";
pub const TYPOGRAPHY: &str = "typography";

/// Top-level key holding the schema version
pub const VERSION_KEY: &str = "version";

/// Highest schema version this crate understands
pub const SUPPORTED_VERSION: u64 = 1;

/// Namespaces the pipeline reads from
pub const KNOWN_NAMESPACES: [&str; 5] = [STORE, COLORS, ANALYTICS, LOCALES, TYPOGRAPHY];

/// Namespaces a settings file must declare itself
pub const REQUIRED_NAMESPACES: [&str; 1] = [ANALYTICS];

/// Check that `root` is a well-formed settings tree.
///
/// Returns the root mapping on success.
pub fn validate(root: &Value) -> Result<&Map<String, Value>, SchemaError> {
    let map = root.as_object().ok_or(SchemaError::NotAMapping {
        found: kind_of(root),
    })?;
    validate_map(map)?;
    Ok(map)
}

/// Check the namespaces of an already unwrapped settings mapping.
pub fn validate_map(map: &Map<String, Value>) -> Result<(), SchemaError> {
    if let Some(version) = map.get(VERSION_KEY) {
        check_version(version)?;
    }

    for namespace in REQUIRED_NAMESPACES {
        if !map.contains_key(namespace) {
            return Err(SchemaError::MissingNamespace { namespace });
        }
    }

    for namespace in KNOWN_NAMESPACES {
        match map.get(namespace) {
            None | Some(Value::Object(_)) => {}
            Some(other) => {
                return Err(SchemaError::NamespaceNotAMapping {
                    namespace,
                    found: kind_of(other),
                });
            }
        }
    }

    Ok(())
}

fn check_version(version: &Value) -> Result<(), SchemaError> {
    match version.as_u64() {
        Some(0) | None => Err(SchemaError::InvalidVersion {
            found: version.to_string(),
        }),
        Some(found) if found > SUPPORTED_VERSION => Err(SchemaError::UnsupportedVersion {
            found,
            supported: SUPPORTED_VERSION,
        }),
        Some(_) => Ok(()),
    }
}

/// Insert an empty mapping for every known namespace the document omits.
pub(crate) fn fill_placeholders(map: &mut Map<String, Value>) {
    for namespace in KNOWN_NAMESPACES {
        map.entry(namespace)
            .or_insert_with(|| Value::Object(Map::new()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn accepts_minimal_document() {
        let doc = json!({ "analytics": {} });
        assert!(validate(&doc).is_ok());
    }

    #[rstest]
    #[case(json!([]), "array")]
    #[case(json!("settings"), "string")]
    #[case(json!(null), "null")]
    fn rejects_non_mapping_root(#[case] doc: Value, #[case] found: &'static str) {
        assert_eq!(validate(&doc).unwrap_err(), SchemaError::NotAMapping { found });
    }

    #[test]
    fn rejects_missing_analytics() {
        let doc = json!({ "store": { "name": "Demo" } });
        assert_eq!(
            validate(&doc).unwrap_err(),
            SchemaError::MissingNamespace {
                namespace: "analytics"
            }
        );
    }

    #[test]
    fn rejects_scalar_namespace() {
        let doc = json!({ "analytics": {}, "typography": "Inter" });
        assert_eq!(
            validate(&doc).unwrap_err(),
            SchemaError::NamespaceNotAMapping {
                namespace: "typography",
                found: "string"
            }
        );
    }

    #[test]
    fn unknown_namespaces_are_not_checked() {
        let doc = json!({ "analytics": {}, "social": ["x", "y"] });
        assert!(validate(&doc).is_ok());
    }

    #[rstest]
    #[case(json!(1), true)]
    #[case(json!(2), false)]
    #[case(json!(0), false)]
    #[case(json!("1"), false)]
    #[case(json!(1.5), false)]
    fn version_checks(#[case] version: Value, #[case] ok: bool) {
        let doc = json!({ "version": version, "analytics": {} });
        assert_eq!(validate(&doc).is_ok(), ok);
    }

    #[test]
    fn placeholders_fill_only_missing_namespaces() {
        let mut map = json!({ "analytics": { "gtmId": "GTM-1" } })
            .as_object()
            .cloned()
            .unwrap();
        fill_placeholders(&mut map);

        for namespace in KNOWN_NAMESPACES {
            assert!(map[namespace].is_object(), "{namespace} should be present");
        }
        assert_eq!(map["analytics"]["gtmId"], "GTM-1");
    }
}
