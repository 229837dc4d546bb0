//! Error types for the model catalog client.
//!
//! Failures are wrapped, never retried or swallowed: a transport error, a
//! non-success status or an undecodable body reaches the caller as one of the
//! variants below.

use thiserror::Error;

/// Main error type for the catalog client.
#[derive(Debug, Error)]
pub enum MlHubError {
    // Network errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        /// Optional cause description
        cause: Option<String>,
    },

    #[error("HTTP {status} from {url}: {body}")]
    HttpStatus {
        status: u16,
        /// Request URL with the API key redacted
        url: String,
        body: String,
    },

    #[error("Invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Request already carries a different API key parameter")]
    ConflictingApiKey,

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Catalog errors
    #[error("No item matched id: {id}")]
    NoMatchingItem { id: String },

    #[error("Missing {extension} fields: {}", .fields.join(", "))]
    MissingExtensionFields {
        extension: String,
        fields: Vec<String>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Validation errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, MlHubError>;

impl From<serde_json::Error> for MlHubError {
    fn from(err: serde_json::Error) -> Self {
        MlHubError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for MlHubError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest includes the full URL (and so the key) in its message
        let err = err.without_url();
        MlHubError::Network {
            message: err.to_string(),
            cause: std::error::Error::source(&err).map(|s| s.to_string()),
        }
    }
}

impl From<url::ParseError> for MlHubError {
    fn from(err: url::ParseError) -> Self {
        MlHubError::InvalidUrl {
            url: String::new(),
            message: err.to_string(),
        }
    }
}

impl MlHubError {
    /// Create a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MlHubError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// HTTP status code, if this error came from a non-success response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            MlHubError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MlHubError::NoMatchingItem {
            id: "model-x".into(),
        };
        assert_eq!(err.to_string(), "No item matched id: model-x");
    }

    #[test]
    fn test_missing_fields_display() {
        let err = MlHubError::MissingExtensionFields {
            extension: "ml-model".into(),
            fields: vec![
                "ml-model:architecture".into(),
                "ml-model:prediction_type".into(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Missing ml-model fields: ml-model:architecture, ml-model:prediction_type"
        );
    }

    #[test]
    fn test_status_code() {
        let err = MlHubError::HttpStatus {
            status: 401,
            url: "https://example.com/models".into(),
            body: "unauthorized".into(),
        };
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(MlHubError::ConflictingApiKey.status_code(), None);
    }

    #[test]
    fn test_json_conversion() {
        let err: MlHubError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, MlHubError::Json { .. }));
    }
}
