//! Error types for the API client and configuration loader.

use thiserror::Error;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Errors from the token and chat endpoints.
///
/// Nothing here is retried; every variant is fatal to the call that produced it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network / TLS / reqwest-level failure.
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx status from either endpoint.
    #[error("http request failed: status {code}: {body}")]
    Status { code: u16, body: String },
    /// Body was not JSON, or the token reply lacked required fields.
    #[error("response parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    pub(crate) fn status(code: u16, body: String) -> Self {
        Self::Status { code, body }
    }

    /// HTTP status code for `Status` errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            Self::Parse(_) => None,
        }
    }
}
