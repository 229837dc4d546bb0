//! Readers for STAC extension fields on model items.
//!
//! - [`scientific`] - citation, DOI and publications
//! - [`ml_model`] - architecture, learning approach and prediction type

pub mod ml_model;
pub mod scientific;

pub use ml_model::MlModelProperties;
pub use scientific::{Publication, ScientificCitation};

use crate::catalog::Item;

/// Whether the item declares an extension whose schema URI starts with
/// `schema_prefix`.
pub fn has_extension(item: &Item, schema_prefix: &str) -> bool {
    item.stac_extensions
        .iter()
        .any(|uri| uri.starts_with(schema_prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension_matches_any_version() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "id": "m",
            "stac_extensions": ["https://stac-extensions.github.io/scientific/v1.0.0/schema.json"]
        }))
        .unwrap();

        assert!(has_extension(&item, scientific::SCHEMA_PREFIX));
        assert!(!has_extension(&item, ml_model::SCHEMA_PREFIX));
    }
}
