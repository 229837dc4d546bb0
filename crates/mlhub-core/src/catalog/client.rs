//! HTTP client for the model catalog API.
//!
//! ## API Surface
//!
//! - `/models`   — Summary listing of every published model
//! - `/search`   — STAC item search (used for lookup by id)
//! - asset hrefs — Opaque download URLs, fetched with the same API key

use super::search::ItemSearch;
use super::types::{Asset, Item, ItemCollection, ModelSummary};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::network::ApiSession;
use tracing::{debug, info};

/// Client for the catalog's models and item search endpoints.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    session: ApiSession,
}

impl CatalogClient {
    /// Create a client for the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            session: ApiSession::new(config)?,
        })
    }

    /// Create a client over an existing session.
    pub fn with_session(session: ApiSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &ApiSession {
        &self.session
    }

    /// List every model published by the catalog.
    pub async fn list_models(&self) -> Result<Vec<ModelSummary>> {
        let models: Vec<ModelSummary> = self.session.get_json("models", &[]).await?;
        info!("Catalog lists {} models", models.len());
        Ok(models)
    }

    /// Run an item search.
    pub async fn search(&self, search: &ItemSearch) -> Result<ItemCollection> {
        let collection: ItemCollection = self.session.post_json("search", search).await?;
        debug!("Item search returned {} features", collection.features.len());
        Ok(collection)
    }

    /// Look up one model item by id.
    ///
    /// Fails with [`crate::MlHubError::NoMatchingItem`] when the search
    /// returns no features.
    pub async fn get_model(&self, id: &str) -> Result<Item> {
        let collection = self.search(&ItemSearch::by_id(id)).await?;
        collection.into_first(id)
    }

    /// Download an asset and return its body as text.
    pub async fn fetch_asset_text(&self, asset: &Asset) -> Result<String> {
        self.session.get_text(&asset.href).await
    }
}
