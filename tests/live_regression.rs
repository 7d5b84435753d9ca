//! Live API regression probes.
//!
//! This suite is intentionally `#[ignore]` and is never run by default.
//! It needs real credentials (`GIGACHAT_AUTH_KEY`, or a config file) and
//! network access to the token and chat endpoints.
//!
//! Run explicitly:
//! `cargo test --test live_regression -- --ignored --nocapture`

use gigachat::api::GigaChatClient;
use gigachat::config::load_config;
use gigachat::types::GenerationOptions;
use serde_json::json;
use std::time::Duration;
use tokio::time::timeout;

const PROBE_TIMEOUT: Duration = Duration::from_secs(60);

fn live_client() -> GigaChatClient {
    let config = load_config(None).expect("load config");
    GigaChatClient::from_config(&config).expect("credentials required for live probes")
}

#[tokio::test]
#[ignore = "network regression suite; run explicitly"]
async fn token_then_chat_round_trip() {
    let mut client = live_client();
    assert!(!client.has_valid_token());

    let reply = timeout(
        PROBE_TIMEOUT,
        client.generate_response(
            "Answer with a single word.",
            "Say OK.",
            &GenerationOptions::default(),
        ),
    )
    .await
    .expect("probe timed out")
    .expect("chat request");

    assert!(client.has_valid_token());
    let content = reply["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or_default();
    eprintln!("[live-regression] chat reply: {content}");
    assert!(!content.trim().is_empty(), "empty reply: {reply}");
}

#[tokio::test]
#[ignore = "network regression suite; run explicitly"]
async fn function_call_round_trip() {
    let mut client = live_client();
    let schema = json!({
        "name": "weather_forecast",
        "description": "Returns the weather forecast for a city",
        "parameters": {
            "type": "object",
            "properties": {
                "location": {"type": "string", "description": "City name"}
            },
            "required": ["location"]
        }
    });

    let reply = timeout(
        PROBE_TIMEOUT,
        client.call_with_functions("What is the weather in Moscow?", &[schema]),
    )
    .await
    .expect("probe timed out")
    .expect("function request");

    eprintln!("[live-regression] function reply: {reply}");
    assert!(reply["choices"].is_array(), "unexpected reply: {reply}");
}
