//! Configuration data model.
//!
//! `File*` structs mirror the TOML layout with every field optional; the
//! resolved `Config` always carries concrete values.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::auth::{Credentials, DEFAULT_SCOPE, DEFAULT_TOKEN_URL};
use crate::error::ConfigError;
use crate::types::DEFAULT_MODEL;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub auth: AuthConfig,
    pub api: ApiConfig,
}

impl Config {
    /// Credentials for the configured key and scope.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        if self.auth.auth_key.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "no authorization key configured; set GIGACHAT_AUTH_KEY or `auth.auth_key`"
                    .to_string(),
            ));
        }
        Ok(Credentials::with_scope(
            self.auth.auth_key.clone(),
            self.auth.scope.clone(),
        ))
    }
}

/// Resolved token-endpoint settings.
#[derive(Clone)]
pub struct AuthConfig {
    /// Pre-encoded `base64(client_id:client_secret)`; empty when unset.
    pub auth_key: String,
    pub scope: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            auth_key: String::new(),
            scope: DEFAULT_SCOPE.to_string(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("auth_key_set", &!self.auth_key.is_empty())
            .field("scope", &self.scope)
            .finish()
    }
}

/// Resolved chat API connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token_url: String,
    pub model: String,
    pub timeout_secs: u64,
    /// Extra PEM root certificates to trust.
    pub ca_bundle_file: Option<PathBuf>,
    /// Accept any server certificate. Off unless explicitly enabled.
    pub insecure_skip_tls_verify: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            ca_bundle_file: None,
            insecure_skip_tls_verify: false,
        }
    }
}

/// `gigachat.toml` as written on disk.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileConfig {
    pub(super) auth: FileAuthConfig,
    pub(super) api: FileApiConfig,
}

/// `[auth]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileAuthConfig {
    pub(super) auth_key: Option<String>,
    /// Name of an env var holding the key.
    pub(super) auth_key_env: Option<String>,
    pub(super) client_id: Option<String>,
    pub(super) client_secret: Option<String>,
    pub(super) scope: Option<String>,
}

/// `[api]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileApiConfig {
    pub(super) base_url: Option<String>,
    pub(super) token_url: Option<String>,
    pub(super) model: Option<String>,
    pub(super) timeout_secs: Option<u64>,
    pub(super) ca_bundle_file: Option<PathBuf>,
    pub(super) insecure_skip_tls_verify: Option<bool>,
}
