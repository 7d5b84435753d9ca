//! Client-credential token acquisition.

use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use super::types::{AccessToken, Credentials};
use crate::error::ApiError;

/// Token endpoint used when none is configured.
pub const DEFAULT_TOKEN_URL: &str = "https://ngw.devices.sberbank.ru:9443/api/v2/oauth";

/// Token endpoint response shape. Both fields are required.
#[derive(Debug, Deserialize)]
struct OAuthTokenResponse {
    access_token: String,
    /// Absolute expiry in epoch milliseconds.
    expires_at: i64,
}

/// Request a fresh access token for `credentials`.
///
/// The reply is fully parsed before anything is returned, so a malformed body
/// never yields a half-built token.
pub async fn request_access_token(
    client: &reqwest::Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<AccessToken, ApiError> {
    let rq_uid = Uuid::new_v4().to_string();
    debug!(url = token_url, rq_uid = %rq_uid, scope = credentials.scope(), "requesting access token");

    let response = client
        .post(token_url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Accept", "application/json")
        .header("RqUID", rq_uid)
        .header("Authorization", format!("Basic {}", credentials.auth_key()))
        .form(&[("scope", credentials.scope())])
        .send()
        .await?;

    if !response.status().is_success() {
        let code = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::status(code, body));
    }

    let body = response.text().await?;
    let payload: OAuthTokenResponse = serde_json::from_str(&body)?;
    info!(expires_at = payload.expires_at, "obtained new access token");
    Ok(AccessToken {
        value: payload.access_token,
        expires_at_millis: payload.expires_at,
    })
}
