//! gigachat — a token-caching client for the GigaChat chat API.
//!
//! The client obtains an OAuth bearer token with a pre-encoded client key,
//! caches it until its reported expiry, and exposes chat completion, function
//! calling, and embeddings requests that return the service's JSON verbatim.
//!
//! # Quick start
//!
//! ```no_run
//! use gigachat::api::GigaChatClient;
//! use gigachat::auth::Credentials;
//! use gigachat::types::GenerationOptions;
//!
//! # async fn example() -> Result<(), gigachat::error::ApiError> {
//! let mut client = GigaChatClient::new(Credentials::new("<base64 client_id:secret>"));
//! let reply = client
//!     .generate_response("You are helpful", "Hi", &GenerationOptions::default())
//!     .await?;
//! println!("{}", reply["choices"][0]["message"]["content"]);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
#[cfg(test)]
pub mod testsupport;
pub mod types;
