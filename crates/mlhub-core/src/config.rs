//! Centralized configuration for the catalog client.
//!
//! Constants live on unit structs grouped by concern. Per-session values
//! (base URL and API key) are carried by [`ClientConfig`], which is passed
//! explicitly to every client constructor.

use crate::error::{MlHubError, Result};
use std::time::Duration;
use url::Url;

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.radiant.earth/mlhub/v1";
    /// Query parameter that carries the API key on every request.
    pub const API_KEY_PARAM: &'static str = "key";
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
    pub const USER_AGENT: &'static str = "mlhub-core/0.1";
}

/// Output formatting configuration.
pub struct DisplayConfig;

impl DisplayConfig {
    /// Maximum number of model ids printed by the listing step.
    pub const MODEL_LIST_LIMIT: usize = 30;
    /// End datetime used by the catalog for open-ended intervals.
    pub const OPEN_END_SENTINEL: &'static str = "9999-12-31T23:59:59Z";
    pub const OPEN_END_MARKER: &'static str = "...";
}

/// Tile rendering service configuration.
pub struct TileConfig;

impl TileConfig {
    pub const DEFAULT_ENDPOINT: &'static str = "https://planetarycomputer.microsoft.com/api/data/v1";
    pub const TILEJSON_PATH: &'static str = "item/tilejson.json";
}

/// Base URL and API key for one catalog session.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    api_key: String,
}

impl ClientConfig {
    /// Create a configuration, validating both values.
    ///
    /// The base URL must be an absolute `http`/`https` URL. The API key must
    /// be non-empty after trimming.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| MlHubError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(MlHubError::Config {
                message: format!("Unsupported base URL scheme: {}", base_url.scheme()),
            });
        }

        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(MlHubError::Config {
                message: "API key must not be empty".to_string(),
            });
        }

        Ok(Self { base_url, api_key })
    }

    /// Configuration against the default public catalog.
    pub fn with_default_base_url(api_key: impl Into<String>) -> Result<Self> {
        Self::new(NetworkConfig::DEFAULT_BASE_URL, api_key)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_valid() {
        let config = ClientConfig::new("https://example.com/api/v1", " secret ").unwrap();
        assert_eq!(config.base_url().as_str(), "https://example.com/api/v1");
        assert_eq!(config.api_key(), "secret");
    }

    #[test]
    fn test_client_config_rejects_empty_key() {
        let result = ClientConfig::new("https://example.com", "   ");
        assert!(matches!(result, Err(MlHubError::Config { .. })));
    }

    #[test]
    fn test_client_config_rejects_relative_url() {
        let result = ClientConfig::new("api/v1", "secret");
        assert!(matches!(result, Err(MlHubError::InvalidUrl { .. })));
    }

    #[test]
    fn test_client_config_rejects_non_http_scheme() {
        let result = ClientConfig::new("ftp://example.com", "secret");
        assert!(matches!(result, Err(MlHubError::Config { .. })));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ClientConfig::with_default_base_url("super-secret").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
