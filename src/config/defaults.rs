//! Default configuration constants.

/// Base URL for the chat and embeddings endpoints.
pub(super) const DEFAULT_API_BASE_URL: &str = "https://gigachat.devices.sberbank.ru/api/v1";
/// Timeout for each outbound HTTP request.
pub(super) const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Config file name looked up locally and under the user config dir.
pub(super) const CONFIG_FILE_NAME: &str = "gigachat.toml";
/// Directory under the user config root holding the global config file.
pub(super) const CONFIG_DIR_NAME: &str = "gigachat";
