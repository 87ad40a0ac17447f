//! `analytics` namespace

use serde_json::{Map, Value};

use super::string_field;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsSettings {
    /// Tag manager container id, e.g. `GTM-XXXX`
    pub gtm_id: Option<String>,
}

impl AnalyticsSettings {
    pub(crate) fn from_namespace(map: &Map<String, Value>) -> Self {
        Self {
            gtm_id: string_field(map, "gtmId"),
        }
    }
}
