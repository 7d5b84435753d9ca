//! Credentials, cached access tokens, and the OAuth token endpoint.
//!
//! The token endpoint follows the client-credentials pattern: a pre-encoded
//! `Basic` key plus a scope is exchanged for a short-lived bearer token whose
//! absolute expiry is reported in epoch milliseconds.

mod oauth;
mod types;

pub use oauth::{request_access_token, DEFAULT_TOKEN_URL};
pub use types::{encode_auth_key, AccessToken, Credentials, DEFAULT_SCOPE};

#[cfg(test)]
pub(crate) use types::unix_now_millis;
