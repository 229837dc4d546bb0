//! Scientific citation extension (`sci:` fields).

use super::has_extension;
use crate::catalog::Item;
use serde::Deserialize;
use serde_json::Value;

pub const SCHEMA_PREFIX: &str = "https://stac-extensions.github.io/scientific/";

const CITATION: &str = "sci:citation";
const DOI: &str = "sci:doi";
const PUBLICATIONS: &str = "sci:publications";

/// A related publication.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Publication {
    #[serde(default)]
    pub citation: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
}

/// Citation fields of an item. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScientificCitation {
    pub citation: Option<String>,
    pub doi: Option<String>,
    pub publications: Vec<Publication>,
}

impl ScientificCitation {
    /// Read the citation fields, or `None` when the item does not declare
    /// the extension. Malformed publication entries are skipped.
    pub fn from_item(item: &Item) -> Option<Self> {
        if !has_extension(item, SCHEMA_PREFIX) {
            return None;
        }

        let props = &item.properties;
        let publications = match props.extra.get(PUBLICATIONS) {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(|entry| Publication::deserialize(entry).ok())
                .collect(),
            _ => Vec::new(),
        };

        Some(Self {
            citation: props.get_str(CITATION).map(str::to_string),
            doi: props.get_str(DOI).map(str::to_string),
            publications,
        })
    }

    /// DOI as a resolvable URL.
    pub fn doi_url(&self) -> Option<String> {
        self.doi.as_ref().map(|doi| format!("https://doi.org/{}", doi))
    }
}
