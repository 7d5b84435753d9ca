//! Token-caching client for chat completions, function calling, and
//! embeddings.

use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use super::transport;
use crate::auth::{request_access_token, AccessToken, Credentials};
use crate::config::{ApiConfig, Config};
use crate::error::{ApiError, ConfigError};
use crate::types::{ChatRequest, EmbeddingsRequest, GenerationOptions};

/// Client for the GigaChat API.
///
/// Holds the caller's credentials and caches one bearer token in memory. The
/// token is fetched lazily: every request first checks it and, when it is
/// missing or expired, performs exactly one token request before proceeding.
/// Nothing is retried.
pub struct GigaChatClient {
    http: reqwest::Client,
    credentials: Credentials,
    client_id: String,
    token_url: String,
    base_url: String,
    token: Option<AccessToken>,
}

impl GigaChatClient {
    /// Client against the public endpoints with default settings. No I/O.
    pub fn new(credentials: Credentials) -> Self {
        let api = ApiConfig::default();
        let http = transport::default_http_client(Duration::from_secs(api.timeout_secs));
        Self::assemble(http, credentials, &api)
    }

    /// Client using endpoint, timeout, and TLS settings from `api`.
    pub fn with_config(credentials: Credentials, api: &ApiConfig) -> Result<Self, ConfigError> {
        let http = transport::build_http_client(api)?;
        Ok(Self::assemble(http, credentials, api))
    }

    /// Client with credentials and API settings resolved from `config`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::with_config(config.credentials()?, &config.api)
    }

    fn assemble(http: reqwest::Client, credentials: Credentials, api: &ApiConfig) -> Self {
        // Opaque keys carry no id; such a client identifies itself with a
        // random id that stays fixed for its lifetime.
        let client_id = credentials.client_id().unwrap_or_else(|| {
            debug!("authorization key has no decodable client id; using a generated one");
            Uuid::new_v4().to_string()
        });
        Self {
            http,
            client_id,
            credentials,
            token_url: api.token_url.clone(),
            base_url: api.base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Value sent as `X-Client-ID`: the id decoded from a `base64(id:secret)`
    /// key, otherwise a UUID generated when the client was built.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The cached token, if one has been obtained.
    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// True when a token is cached and has not expired.
    pub fn has_valid_token(&self) -> bool {
        self.token.as_ref().is_some_and(|token| !token.is_expired())
    }

    /// Fetch a new token, replacing the cached one.
    ///
    /// On failure the previously cached token is kept as it was.
    pub async fn refresh_token(&mut self) -> Result<&AccessToken, ApiError> {
        let token = request_access_token(&self.http, &self.token_url, &self.credentials).await?;
        Ok(self.token.insert(token))
    }

    /// Return a usable bearer, refreshing first when none is cached or the
    /// cached one has expired.
    async fn ensure_token_valid(&mut self) -> Result<String, ApiError> {
        if let Some(token) = self.token.as_ref().filter(|token| !token.is_expired()) {
            return Ok(token.value.clone());
        }
        debug!("access token missing or expired");
        Ok(self.refresh_token().await?.value.clone())
    }

    async fn post_authorized<B: serde::Serialize + ?Sized>(
        &mut self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let bearer = self.ensure_token_valid().await?;
        let url = format!("{}{path}", self.base_url);
        transport::post_json(&self.http, &url, &bearer, &self.client_id, body).await
    }

    /// Send a caller-built chat request and return the raw JSON reply.
    pub async fn chat_completion(&mut self, request: &ChatRequest) -> Result<Value, ApiError> {
        self.post_authorized("/chat/completions", request).await
    }

    /// Ask the model to answer `user_message` under `system_prompt`.
    ///
    /// Sampling values in `options` are forwarded without range checks.
    pub async fn generate_response(
        &mut self,
        system_prompt: &str,
        user_message: &str,
        options: &GenerationOptions,
    ) -> Result<Value, ApiError> {
        let request = ChatRequest::conversation(system_prompt, user_message, options);
        self.chat_completion(&request).await
    }

    /// Send `user_message` with function schemas on the pro model tier,
    /// letting the model choose whether to call one.
    pub async fn call_with_functions(
        &mut self,
        user_message: &str,
        functions: &[Value],
    ) -> Result<Value, ApiError> {
        let request = ChatRequest::with_functions(user_message, functions.to_vec());
        self.chat_completion(&request).await
    }

    /// Compute embeddings for `texts`.
    pub async fn create_embeddings(
        &mut self,
        texts: &[String],
        model: &str,
    ) -> Result<Value, ApiError> {
        let request = EmbeddingsRequest {
            model: model.to_string(),
            input: texts.to_vec(),
        };
        self.post_authorized("/embeddings", &request).await
    }
}
