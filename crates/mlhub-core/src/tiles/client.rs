//! Client for a TileJSON-producing tile rendering service.

use super::layer::TileLayer;
use crate::config::{NetworkConfig, TileConfig};
use crate::error::{MlHubError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

/// TileJSON document returned by the rendering service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileJson {
    #[serde(default)]
    pub tilejson: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Tile URL templates with `{z}/{x}/{y}` placeholders.
    pub tiles: Vec<String>,
    #[serde(default)]
    pub bounds: Option<Vec<f64>>,
    #[serde(default)]
    pub center: Option<Vec<f64>>,
    #[serde(default)]
    pub minzoom: Option<u8>,
    #[serde(default)]
    pub maxzoom: Option<u8>,
}

/// Client that turns [`TileLayer`] configurations into TileJSON requests.
#[derive(Debug, Clone)]
pub struct TilerClient {
    endpoint: Url,
    client: Client,
}

impl TilerClient {
    /// Create a client for the given service root.
    ///
    /// If `endpoint` is `None`, defaults to [`TileConfig::DEFAULT_ENDPOINT`].
    pub fn new(endpoint: Option<&str>) -> Result<Self> {
        let raw = endpoint.unwrap_or(TileConfig::DEFAULT_ENDPOINT);
        let mut endpoint = Url::parse(raw).map_err(|e| MlHubError::InvalidUrl {
            url: raw.to_string(),
            message: e.to_string(),
        })?;
        let path = format!("{}/", endpoint.path().trim_end_matches('/'));
        endpoint.set_path(&path);

        let client = Client::builder()
            .timeout(NetworkConfig::REQUEST_TIMEOUT)
            .user_agent(NetworkConfig::USER_AGENT)
            .build()
            .map_err(|e| MlHubError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                cause: None,
            })?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the TileJSON request URL for a layer.
    pub fn tilejson_url(&self, layer: &TileLayer) -> Result<Url> {
        layer.validate()?;

        let mut url = self.endpoint.join(TileConfig::TILEJSON_PATH)?;
        url.query_pairs_mut()
            .extend_pairs(layer.query_params());
        Ok(url)
    }

    /// Fetch the TileJSON document for a layer.
    pub async fn fetch_tilejson(&self, layer: &TileLayer) -> Result<TileJson> {
        let url = self.tilejson_url(layer)?;
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MlHubError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        let body = response.text().await?;
        let mut tilejson: TileJson = serde_json::from_str(&body).map_err(|e| MlHubError::Json {
            message: format!("Failed to parse TileJSON from {}: {}", url, e),
            source: Some(e),
        })?;
        if tilejson.name.is_none() {
            tilejson.name = Some(layer.display_name().to_string());
        }

        info!(
            "Layer '{}' resolved to {} tile template(s)",
            layer.display_name(),
            tilejson.tiles.len()
        );
        Ok(tilejson)
    }
}
