//! Environment overrides.
//!
//! `GIGACHAT_*` variables win over file values. Lookups go through an injected
//! closure so tests never touch the process environment.

use std::path::PathBuf;

use super::Config;
use crate::auth::encode_auth_key;
use crate::error::ConfigError;

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(key) = non_empty(env_lookup, "GIGACHAT_AUTH_KEY") {
        config.auth.auth_key = key;
    } else if let Some(key) = client_secret_pair(
        non_empty(env_lookup, "GIGACHAT_CLIENT_ID"),
        non_empty(env_lookup, "GIGACHAT_CLIENT_SECRET"),
        "GIGACHAT_CLIENT_ID/GIGACHAT_CLIENT_SECRET",
    )? {
        config.auth.auth_key = key;
    }
    if let Some(scope) = non_empty(env_lookup, "GIGACHAT_SCOPE") {
        config.auth.scope = scope;
    }
    if let Some(url) = non_empty(env_lookup, "GIGACHAT_AUTH_URL") {
        config.api.token_url = url;
    }
    if let Some(url) = non_empty(env_lookup, "GIGACHAT_API_BASE") {
        config.api.base_url = url;
    }
    if let Some(model) = non_empty(env_lookup, "GIGACHAT_MODEL") {
        config.api.model = model;
    }
    if let Some(timeout) = non_empty(env_lookup, "GIGACHAT_TIMEOUT_SECS") {
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid GIGACHAT_TIMEOUT_SECS value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        // Zero would mean "no timeout"; clamp instead.
        config.api.timeout_secs = parsed.max(1);
    }
    if let Some(path) = non_empty(env_lookup, "GIGACHAT_CA_BUNDLE_FILE") {
        config.api.ca_bundle_file = Some(PathBuf::from(path));
    }
    if let Some(flag) = non_empty(env_lookup, "GIGACHAT_INSECURE_SKIP_TLS_VERIFY") {
        config.api.insecure_skip_tls_verify = parse_bool(&flag).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "invalid GIGACHAT_INSECURE_SKIP_TLS_VERIFY value `{flag}`: expected true/false"
            ))
        })?;
    }
    Ok(())
}

/// Encode an id/secret pair into an authorization key.
///
/// Both halves must be present together; `source` names them in the error.
pub(super) fn client_secret_pair(
    client_id: Option<String>,
    client_secret: Option<String>,
    source: &str,
) -> Result<Option<String>, ConfigError> {
    match (client_id, client_secret) {
        (Some(id), Some(secret)) => Ok(Some(encode_auth_key(&id, &secret))),
        (None, None) => Ok(None),
        _ => Err(ConfigError::Invalid(format!(
            "{source}: client id and client secret must be set together"
        ))),
    }
}

pub(super) fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
