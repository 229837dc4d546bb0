//! Authenticated HTTP session.
//!
//! Wraps a reqwest client so that every request:
//! - resolves relative paths against the configured base URL
//! - carries the API key as a query parameter
//!
//! Nothing is retried. Transport errors and non-success statuses are
//! returned to the caller as-is.

use crate::config::{ClientConfig, NetworkConfig};
use crate::error::{MlHubError, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

/// HTTP session bound to one base URL and API key.
#[derive(Debug, Clone)]
pub struct ApiSession {
    client: Client,
    config: ClientConfig,
}

impl ApiSession {
    /// Create a new session for the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(NetworkConfig::REQUEST_TIMEOUT)
            .user_agent(NetworkConfig::USER_AGENT)
            .build()
            .map_err(|e| MlHubError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                cause: None,
            })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve a path against the base URL.
    ///
    /// Behaves like `urljoin(base + "/", path)` with slashes normalized on
    /// both sides, so `models` and `/models` land under the base path.
    /// Absolute `http(s)` URLs are returned unchanged.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        if let Ok(url) = Url::parse(path) {
            if matches!(url.scheme(), "http" | "https") {
                return Ok(url);
            }
        }

        let mut base = self.config.base_url().clone();
        let base_path = format!("{}/", base.path().trim_end_matches('/'));
        base.set_path(&base_path);
        base.set_query(None);

        base.join(path.trim_start_matches('/'))
            .map_err(|e| MlHubError::InvalidUrl {
                url: path.to_string(),
                message: e.to_string(),
            })
    }

    /// Resolve a path and attach query parameters plus the API key.
    ///
    /// A `key` parameter supplied by the caller (or already present on an
    /// absolute URL) is accepted only when it equals the configured key, in
    /// which case it appears once. Any other value is rejected with
    /// [`MlHubError::ConflictingApiKey`].
    pub fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.resolve(path)?;
        let key_param = NetworkConfig::API_KEY_PARAM;
        let api_key = self.config.api_key();

        let mut key_in_url = false;
        for (name, value) in url.query_pairs() {
            if name == key_param {
                if value != api_key {
                    return Err(MlHubError::ConflictingApiKey);
                }
                key_in_url = true;
            }
        }
        if params
            .iter()
            .any(|(name, value)| *name == key_param && *value != api_key)
        {
            return Err(MlHubError::ConflictingApiKey);
        }

        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in params.iter().filter(|(name, _)| *name != key_param) {
                pairs.append_pair(name, value);
            }
            if !key_in_url {
                pairs.append_pair(key_param, api_key);
            }
        }

        Ok(url)
    }

    /// GET a path and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.build_url(path, params)?;
        let response = self.send(self.client.get(url.clone()), "GET", &url).await?;
        decode_json(response, &url).await
    }

    /// POST a JSON body to a path and decode the JSON response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path, &[])?;
        let request = self.client.post(url.clone()).json(body);
        let response = self.send(request, "POST", &url).await?;
        decode_json(response, &url).await
    }

    /// GET a path or absolute URL and return the body as text.
    pub async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.build_url(path, &[])?;
        let response = self.send(self.client.get(url.clone()), "GET", &url).await?;
        Ok(response.text().await?)
    }

    async fn send(&self, request: RequestBuilder, method: &str, url: &Url) -> Result<Response> {
        let display_url = redact_api_key(url);
        debug!("{} {}", method, display_url);

        let response = request.send().await.map_err(|e| MlHubError::Network {
            message: format!("{} {} failed: {}", method, display_url, e.without_url()),
            cause: None,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MlHubError::HttpStatus {
                status: status.as_u16(),
                url: display_url,
                body,
            });
        }

        Ok(response)
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| MlHubError::Json {
        message: format!("Failed to parse response from {}: {}", redact_api_key(url), e),
        source: Some(e),
    })
}

/// Render a URL with the API key value masked, for logs and errors.
pub fn redact_api_key(url: &Url) -> String {
    let key_param = NetworkConfig::API_KEY_PARAM;
    if !url.query_pairs().any(|(name, _)| name == key_param) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            if name == key_param {
                (name.into_owned(), "***".to_string())
            } else {
                (name.into_owned(), value.into_owned())
            }
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
