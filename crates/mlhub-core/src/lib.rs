//! MLHub Core - client library for a STAC machine learning model catalog.
//!
//! This crate lists the models a catalog publishes, looks a model up by id,
//! reads its extension fields, downloads its runtime assets, and builds tile
//! layer requests for a dynamic tile rendering service.
//!
//! # Example
//!
//! ```rust,ignore
//! use mlhub_core::{CatalogClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> mlhub_core::Result<()> {
//!     let config = ClientConfig::with_default_base_url("my-api-key")?;
//!     let catalog = CatalogClient::new(config)?;
//!
//!     let models = catalog.list_models().await?;
//!     println!("Found {} models", models.len());
//!
//!     let item = catalog.get_model("model-cyclone-wind-estimation-torchgeo-v1").await?;
//!     println!("{:?}", item.bbox);
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod extensions;
pub mod network;
pub mod tiles;

// Re-export commonly used types
pub use catalog::{Asset, CatalogClient, Item, ItemCollection, ItemSearch, ModelSummary};
pub use config::{ClientConfig, DisplayConfig, NetworkConfig, TileConfig};
pub use display::{format_end_datetime, write_model_detail, write_model_listing, ModelDetail};
pub use error::{MlHubError, Result};
pub use extensions::{MlModelProperties, ScientificCitation};
pub use network::ApiSession;
pub use tiles::{Rescale, TileJson, TileLayer, TilerClient};
