//! ML model extension (`ml-model:` fields).
//!
//! The catalog does not always declare this extension in `stac_extensions`,
//! so fields are read straight from the properties. Required fields are
//! checked together and every absent one is reported in a single error.

use crate::catalog::Item;
use crate::error::{MlHubError, Result};

pub const SCHEMA_PREFIX: &str = "https://stac-extensions.github.io/ml-model/";

pub const ARCHITECTURE: &str = "ml-model:architecture";
pub const LEARNING_APPROACH: &str = "ml-model:learning_approach";
pub const PREDICTION_TYPE: &str = "ml-model:prediction_type";
pub const MODEL_TYPE: &str = "ml-model:type";
pub const TRAINING_PROCESSOR_TYPE: &str = "ml-model:training-processor-type";
pub const TRAINING_OS: &str = "ml-model:training-os";

/// Fields that must be present for a model description.
pub const REQUIRED_FIELDS: [&str; 3] = [ARCHITECTURE, LEARNING_APPROACH, PREDICTION_TYPE];

/// Fields read when present.
pub const OPTIONAL_FIELDS: [&str; 3] = [MODEL_TYPE, TRAINING_PROCESSOR_TYPE, TRAINING_OS];

/// Typed view of an item's ML model fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MlModelProperties {
    pub architecture: String,
    /// e.g. "supervised", "unsupervised"
    pub learning_approach: String,
    /// e.g. "classification", "regression"
    pub prediction_type: String,
    pub model_type: Option<String>,
    pub training_processor_type: Option<String>,
    pub training_os: Option<String>,
}

impl MlModelProperties {
    /// Read the fields from an item.
    ///
    /// Returns [`MlHubError::MissingExtensionFields`] listing every required
    /// field that is absent or not a string.
    pub fn from_item(item: &Item) -> Result<Self> {
        let props = &item.properties;
        let field = |key: &str| props.get_str(key).map(str::to_string);

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|key| props.get_str(key).is_none())
            .map(|key| key.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(MlHubError::MissingExtensionFields {
                extension: "ml-model".to_string(),
                fields: missing,
            });
        }

        Ok(Self {
            architecture: field(ARCHITECTURE).unwrap_or_default(),
            learning_approach: field(LEARNING_APPROACH).unwrap_or_default(),
            prediction_type: field(PREDICTION_TYPE).unwrap_or_default(),
            model_type: field(MODEL_TYPE),
            training_processor_type: field(TRAINING_PROCESSOR_TYPE),
            training_os: field(TRAINING_OS),
        })
    }
}
