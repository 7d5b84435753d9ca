//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`GIGACHAT_AUTH_KEY`, `GIGACHAT_API_BASE`, ...)
//! 2. TOML file specified via --config CLI flag
//! 3. ./gigachat.toml in the current directory
//! 4. $XDG_CONFIG_HOME/gigachat/gigachat.toml (or ~/.config/gigachat/gigachat.toml)
//! 5. Built-in defaults

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

mod defaults;
mod env;
mod types;

use defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use env::{apply_env_overrides, client_secret_pair};
pub use types::{ApiConfig, AuthConfig, Config};
use types::FileConfig;

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        dirs::config_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let config_text = read_config_text(path_override, &read_file, &config_root)?;
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = resolve_file_config(parsed, &env_lookup)?;
    apply_env_overrides(&mut config, &env_lookup)?;
    Ok(config)
}

fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<String, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // An explicit path must exist; implicit locations are best-effort.
    if let Some(p) = path_override {
        return Ok(read_file(Path::new(p))?);
    }
    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok(text);
    }
    if let Some(dir) = config_root() {
        if let Ok(text) = read_file(&dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)) {
            return Ok(text);
        }
    }
    Ok(String::new())
}

fn resolve_file_config<FEnv>(parsed: FileConfig, env_lookup: &FEnv) -> Result<Config, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();
    let auth = parsed.auth;

    // At most one key source per file: literal key, named env var, or id/secret pair.
    let auth_key = normalized(auth.auth_key);
    let auth_key_env = normalized(auth.auth_key_env);
    let pair = client_secret_pair(
        normalized(auth.client_id),
        normalized(auth.client_secret),
        "`auth.client_id`/`auth.client_secret`",
    )?;
    let sources = [auth_key.is_some(), auth_key_env.is_some(), pair.is_some()];
    if sources.iter().filter(|set| **set).count() > 1 {
        return Err(ConfigError::Invalid(
            "`auth.auth_key`, `auth.auth_key_env`, and `auth.client_id`/`auth.client_secret` \
             are mutually exclusive"
                .into(),
        ));
    }
    if let Some(key) = auth_key.or(pair) {
        config.auth.auth_key = key;
    } else if let Some(var) = auth_key_env {
        config.auth.auth_key = env::non_empty(env_lookup, &var).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "`auth.auth_key_env` names `{var}`, but that variable is not set"
            ))
        })?;
    }
    if let Some(scope) = normalized(auth.scope) {
        config.auth.scope = scope;
    }

    let api = parsed.api;
    if let Some(url) = normalized(api.base_url) {
        config.api.base_url = url;
    }
    if let Some(url) = normalized(api.token_url) {
        config.api.token_url = url;
    }
    if let Some(model) = normalized(api.model) {
        config.api.model = model;
    }
    if let Some(timeout) = api.timeout_secs {
        config.api.timeout_secs = timeout.max(1);
    }
    config.api.ca_bundle_file = api.ca_bundle_file;
    if let Some(flag) = api.insecure_skip_tls_verify {
        config.api.insecure_skip_tls_verify = flag;
    }
    Ok(config)
}

fn normalized(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
