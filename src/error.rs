//! Error types for Omie API operations.

use thiserror::Error;

/// Errors that can occur during Omie API operations.
#[derive(Debug, Error)]
pub enum OmieError {
    /// `app_key` or `app_secret` is blank.
    #[error("Omie credentials required: {0}")]
    MissingCredentials(String),

    /// Omie rejected the call with a fault payload.
    ///
    /// Omie answers every documented client error with HTTP 500 and a JSON
    /// body carrying `faultstring` and `faultcode`.
    #[error("Omie returned the error {fault_code}: '{fault_string}'")]
    Request {
        fault_code: String,
        fault_string: String,
    },

    /// Any other non-success response.
    #[error("Invalid response received (HTTP {status}): {body}")]
    InvalidResponse { status: u16, body: String },

    /// The resource has no call registered for this operation.
    #[error("{entity_type} does not support the '{operation}' operation")]
    UnsupportedOperation {
        entity_type: &'static str,
        operation: &'static str,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl OmieError {
    /// Whether this is a classified rejection from Omie.
    ///
    /// `find`, `list` and `associate` turn these into empty results; every
    /// other kind reaches the caller.
    #[must_use]
    pub fn is_request_error(&self) -> bool {
        matches!(self, OmieError::Request { .. })
    }

    /// Fault code of a classified rejection.
    pub fn fault_code(&self) -> Option<&str> {
        match self {
            OmieError::Request { fault_code, .. } => Some(fault_code.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for Omie operations.
pub type Result<T> = core::result::Result<T, OmieError>;
