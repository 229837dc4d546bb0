//! STAC response types returned by the catalog API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Asset role for the container/compose file used to run inference.
pub const INFERENCE_RUNTIME_ROLE: &str = "ml-model:inference-runtime";

/// Asset role for trained model weights.
pub const CHECKPOINT_ROLE: &str = "ml-model:checkpoint";

/// One entry of the `/models` listing. Only `id` is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A file or resource attached to an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Media type of the resource.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Asset {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// A link object of an item or item collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Item properties. Temporal fields are typed; every other key
/// (extension fields included) is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemProperties {
    #[serde(default)]
    pub datetime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_datetime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_datetime: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItemProperties {
    /// Look up a property as a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

/// A STAC item describing one trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stac_version: Option<String>,
    #[serde(default)]
    pub stac_extensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(default)]
    pub bbox: Option<Vec<f64>>,
    /// GeoJSON geometry, kept as received.
    #[serde(default)]
    pub geometry: Option<Value>,
    #[serde(default)]
    pub properties: ItemProperties,
    #[serde(default)]
    pub assets: BTreeMap<String, Asset>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Item {
    /// All assets carrying the given role, in key order.
    pub fn assets_with_role<'a>(
        &'a self,
        role: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a Asset)> + 'a {
        self.assets
            .iter()
            .filter(move |(_, asset)| asset.has_role(role))
            .map(|(key, asset)| (key.as_str(), asset))
    }

    /// First asset carrying the given role.
    pub fn asset_by_role(&self, role: &str) -> Option<(&str, &Asset)> {
        self.assets
            .iter()
            .find(|(_, asset)| asset.has_role(role))
            .map(|(key, asset)| (key.as_str(), asset))
    }
}

/// Result page of an item search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemCollection {
    #[serde(default)]
    pub features: Vec<Item>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl ItemCollection {
    /// Take the first feature, failing when the search matched nothing.
    pub fn into_first(self, id: &str) -> crate::Result<Item> {
        self.features
            .into_iter()
            .next()
            .ok_or_else(|| crate::MlHubError::NoMatchingItem { id: id.to_string() })
    }
}
