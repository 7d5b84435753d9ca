//! HTTP client construction and the authorized JSON POST shared by every
//! chat-side endpoint.

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::error::{ApiError, ConfigError};

/// Build an HTTP client honoring timeout and TLS settings.
pub(super) fn build_http_client(api: &ApiConfig) -> Result<reqwest::Client, ConfigError> {
    let mut builder = reqwest::Client::builder().timeout(Duration::from_secs(api.timeout_secs));

    if let Some(path) = api.ca_bundle_file.as_deref() {
        let pem = std::fs::read(path)?;
        let cert = reqwest::Certificate::from_pem(&pem).map_err(|err| {
            ConfigError::Invalid(format!(
                "failed to load CA bundle `{}`: {err}",
                path.display()
            ))
        })?;
        builder = builder.add_root_certificate(cert);
    }
    if api.insecure_skip_tls_verify {
        warn!("TLS certificate verification is disabled; server identity is not checked");
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder
        .build()
        .map_err(|err| ConfigError::Invalid(format!("failed to build http client: {err}")))
}

/// Build an HTTP client with only the timeout applied.
pub(super) fn default_http_client(timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// POST `body` as JSON with bearer auth, the client id, and fresh
/// request/session ids,
/// returning the reply body as untyped JSON.
pub(super) async fn post_json<B: Serialize + ?Sized>(
    http: &reqwest::Client,
    url: &str,
    bearer: &str,
    client_id: &str,
    body: &B,
) -> Result<Value, ApiError> {
    let request_id = Uuid::new_v4().to_string();
    let session_id = Uuid::new_v4().to_string();
    debug!(url, request_id = %request_id, session_id = %session_id, "POST");

    let response = http
        .post(url)
        .header("Accept", "application/json")
        .header("Authorization", format!("Bearer {bearer}"))
        .header("X-Client-ID", client_id)
        .header("X-Request-ID", request_id)
        .header("X-Session-ID", session_id)
        .json(body)
        .send()
        .await?;
    if !response.status().is_success() {
        let code = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        debug!(url, status = code, "request rejected");
        return Err(ApiError::status(code, body));
    }

    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}
