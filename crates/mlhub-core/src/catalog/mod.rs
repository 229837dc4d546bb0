//! Catalog client for model listing, item search and asset download.
//!
//! # Module Organization
//!
//! - [`types`] - STAC response types (items, assets, listing entries)
//! - [`search`] - Item search parameters
//! - [`client`] - HTTP client over the authenticated session

mod client;
mod search;
mod types;

pub use client::CatalogClient;
pub use search::{DateRange, ItemSearch};
pub use types::{
    Asset, Item, ItemCollection, ItemProperties, Link, ModelSummary, CHECKPOINT_ROLE,
    INFERENCE_RUNTIME_ROLE,
};
