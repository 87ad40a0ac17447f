//! `store` namespace

use serde_json::{Map, Value};

use super::{non_empty_str, string_field};

/// Store identity and the values the commerce SDK needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSettings {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub public_key: Option<String>,
    /// Hosts serving store assets (images, files). May be empty.
    pub asset_hosts: Vec<String>,
}

impl StoreSettings {
    pub(crate) fn from_namespace(map: &Map<String, Value>) -> Self {
        let asset_hosts = match map.get("assetHost") {
            Some(Value::Array(hosts)) => hosts.iter().filter_map(non_empty_str).collect(),
            Some(value) => non_empty_str(value).into_iter().collect(),
            None => Vec::new(),
        };

        Self {
            id: string_field(map, "id"),
            name: string_field(map, "name"),
            url: string_field(map, "url"),
            public_key: string_field(map, "publicKey"),
            asset_hosts,
        }
    }
}
