//! Public auth model types.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Scope requested when none is given (personal-use tier).
pub const DEFAULT_SCOPE: &str = "GIGACHAT_API_PERS";

/// Client identity presented to the token endpoint.
///
/// `auth_key` is the pre-encoded `base64(client_id:client_secret)` pair issued
/// by the provider console. Both fields are fixed once constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    auth_key: String,
    scope: String,
}

impl Credentials {
    /// Credentials with the default personal scope.
    pub fn new(auth_key: impl Into<String>) -> Self {
        Self::with_scope(auth_key, DEFAULT_SCOPE)
    }

    pub fn with_scope(auth_key: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            auth_key: auth_key.into().trim().to_string(),
            scope: scope.into().trim().to_string(),
        }
    }

    /// Encode a raw client id/secret pair into an authorization key.
    pub fn from_client_secret(
        client_id: &str,
        client_secret: &str,
        scope: impl Into<String>,
    ) -> Self {
        Self::with_scope(encode_auth_key(client_id, client_secret), scope)
    }

    pub fn auth_key(&self) -> &str {
        &self.auth_key
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Client id decoded from the authorization key, when it is a
    /// well-formed `base64(id:secret)` pair.
    pub fn client_id(&self) -> Option<String> {
        let decoded = STANDARD.decode(self.auth_key.as_bytes()).ok()?;
        let text = String::from_utf8(decoded).ok()?;
        let (id, _secret) = text.split_once(':')?;
        let id = id.trim();
        (!id.is_empty()).then(|| id.to_string())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("auth_key", &"<redacted>")
            .field("scope", &self.scope)
            .finish()
    }
}

/// `base64(client_id:client_secret)`, the form the token endpoint expects
/// after `Basic`. Both halves are trimmed first.
pub fn encode_auth_key(client_id: &str, client_secret: &str) -> String {
    STANDARD.encode(format!("{}:{}", client_id.trim(), client_secret.trim()))
}

/// Bearer token plus its expiry in epoch milliseconds, as issued.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub(crate) value: String,
    pub(crate) expires_at_millis: i64,
}

impl AccessToken {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn expires_at_millis(&self) -> i64 {
        self.expires_at_millis
    }

    /// Expired once the current time reaches the recorded expiry.
    pub fn is_expired(&self) -> bool {
        unix_now_millis() >= self.expires_at_millis
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("expires_at_millis", &self.expires_at_millis)
            .finish()
    }
}

pub(crate) fn unix_now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
