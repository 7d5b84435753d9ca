//! HTTP client for the GigaChat chat API.
//!
//! - `client`: token caching and the request helpers callers use.
//! - `transport`: HTTP client construction and the shared authorized POST.

mod client;
mod transport;

pub use client::GigaChatClient;
