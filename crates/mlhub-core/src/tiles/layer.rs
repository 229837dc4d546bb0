//! Tile layer configuration for a dynamic tile rendering service.

use crate::error::{MlHubError, Result};
use serde::{Deserialize, Serialize};

/// Linear rescale range applied to raw band values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rescale {
    pub min: f64,
    pub max: f64,
}

impl Rescale {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Parse `"min,max"`.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || MlHubError::validation("rescale", format!("expected MIN,MAX, got '{}'", value));

        let (min, max) = value.split_once(',').ok_or_else(invalid)?;
        let min = min.trim().parse::<f64>().map_err(|_| invalid())?;
        let max = max.trim().parse::<f64>().map_err(|_| invalid())?;
        Ok(Self { min, max })
    }

    pub fn to_param(&self) -> String {
        format!("{},{}", self.min, self.max)
    }
}

/// One map layer: which item/assets to render and how.
///
/// Options left as `None` are not sent, so the rendering service applies
/// its own defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    pub collection: String,
    pub item: String,
    #[serde(default)]
    pub assets: Vec<String>,
    /// Band math over asset names, e.g. `(B08-B04)/(B08+B04)`.
    #[serde(default)]
    pub expression: Option<String>,
    #[serde(default)]
    pub rescale: Option<Rescale>,
    #[serde(default)]
    pub colormap_name: Option<String>,
    /// e.g. `"gamma RGB 2.7, saturation 1.5"`
    #[serde(default)]
    pub color_formula: Option<String>,
    #[serde(default)]
    pub nodata: Option<f64>,
    /// Display name of the layer.
    #[serde(default)]
    pub name: Option<String>,
}

impl TileLayer {
    pub fn new(collection: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            item: item.into(),
            assets: Vec::new(),
            expression: None,
            rescale: None,
            colormap_name: None,
            color_formula: None,
            nodata: None,
            name: None,
        }
    }

    pub fn assets<I, S>(mut self, assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assets = assets.into_iter().map(Into::into).collect();
        self
    }

    pub fn expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    pub fn rescale(mut self, min: f64, max: f64) -> Self {
        self.rescale = Some(Rescale::new(min, max));
        self
    }

    pub fn colormap_name(mut self, colormap: impl Into<String>) -> Self {
        self.colormap_name = Some(colormap.into());
        self
    }

    pub fn color_formula(mut self, formula: impl Into<String>) -> Self {
        self.color_formula = Some(formula.into());
        self
    }

    pub fn nodata(mut self, nodata: f64) -> Self {
        self.nodata = Some(nodata);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name shown for the layer, defaulting to the item id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.item)
    }

    /// Check the layer before building a request.
    pub fn validate(&self) -> Result<()> {
        if self.collection.trim().is_empty() {
            return Err(MlHubError::validation("collection", "must not be empty"));
        }
        if self.item.trim().is_empty() {
            return Err(MlHubError::validation("item", "must not be empty"));
        }
        if self.assets.is_empty() && self.expression.is_none() {
            return Err(MlHubError::validation("assets", "provide at least one asset or an expression"));
        }
        if let Some(rescale) = &self.rescale {
            if !(rescale.min < rescale.max) {
                return Err(MlHubError::validation(
                    "rescale",
                    format!("min ({}) must be below max ({})", rescale.min, rescale.max),
                ));
            }
        }
        Ok(())
    }

    /// Query parameters understood by the rendering service, in a stable order.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("collection", self.collection.clone()),
            ("item", self.item.clone()),
        ];
        params.extend(self.assets.iter().map(|asset| ("assets", asset.clone())));
        if let Some(expression) = &self.expression {
            params.push(("expression", expression.clone()));
        }
        if let Some(rescale) = &self.rescale {
            params.push(("rescale", rescale.to_param()));
        }
        if let Some(colormap) = &self.colormap_name {
            params.push(("colormap_name", colormap.clone()));
        }
        if let Some(formula) = &self.color_formula {
            params.push(("color_formula", formula.clone()));
        }
        if let Some(nodata) = self.nodata {
            params.push(("nodata", nodata.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_parse() {
        assert_eq!(Rescale::parse("0,3000").unwrap(), Rescale::new(0.0, 3000.0));
        assert_eq!(Rescale::parse(" -1 , 1 ").unwrap(), Rescale::new(-1.0, 1.0));
        assert!(Rescale::parse("0").is_err());
        assert!(Rescale::parse("a,b").is_err());
    }

    #[test]
    fn test_rescale_param() {
        assert_eq!(Rescale::new(0.0, 3000.0).to_param(), "0,3000");
        assert_eq!(Rescale::new(-0.5, 0.5).to_param(), "-0.5,0.5");
    }

    #[test]
    fn test_minimal_layer_params() {
        let layer = TileLayer::new("sentinel-2-l2a", "S2A_item").assets(["visual"]);
        assert!(layer.validate().is_ok());
        assert_eq!(
            layer.query_params(),
            vec![
                ("collection", "sentinel-2-l2a".to_string()),
                ("item", "S2A_item".to_string()),
                ("assets", "visual".to_string()),
            ]
        );
        assert_eq!(layer.display_name(), "S2A_item");
    }

    #[test]
    fn test_full_layer_params() {
        let layer = TileLayer::new("landsat-c2-l2", "LC08_item")
            .assets(["red", "nir08"])
            .expression("(nir08-red)/(nir08+red)")
            .rescale(-1.0, 1.0)
            .colormap_name("greens")
            .color_formula("gamma RGB 2.7")
            .nodata(0.0)
            .name("NDVI");

        let params = layer.query_params();
        let names: Vec<&str> = params.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "collection",
                "item",
                "assets",
                "assets",
                "expression",
                "rescale",
                "colormap_name",
                "color_formula",
                "nodata",
            ]
        );
        assert!(params.contains(&("rescale", "-1,1".to_string())));
        assert!(params.contains(&("nodata", "0".to_string())));
        assert_eq!(layer.display_name(), "NDVI");
    }

    #[test]
    fn test_validate_requires_assets_or_expression() {
        let err = TileLayer::new("c", "i").validate().unwrap_err();
        assert!(matches!(err, MlHubError::Validation { ref field, .. } if field == "assets"));

        assert!(TileLayer::new("c", "i").expression("B04*2").validate().is_ok());
    }

    #[test]
    fn test_validate_rescale_order() {
        let err = TileLayer::new("c", "i")
            .assets(["B04"])
            .rescale(10.0, 10.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, MlHubError::Validation { ref field, .. } if field == "rescale"));
    }

    #[test]
    fn test_validate_empty_ids() {
        assert!(TileLayer::new(" ", "i").assets(["a"]).validate().is_err());
        assert!(TileLayer::new("c", "").assets(["a"]).validate().is_err());
    }
}
