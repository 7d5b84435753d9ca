//! Request bodies for the chat-completion and embeddings endpoints.
//!
//! Responses are not modeled: the client hands back the remote JSON verbatim
//! as `serde_json::Value`.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Model used by `generate_response` when none is given.
pub const DEFAULT_MODEL: &str = "GigaChat";
/// Model tier used for every function-calling request.
pub const PRO_MODEL: &str = "GigaChat-Pro";
/// Model used for embeddings when none is given.
pub const DEFAULT_EMBEDDINGS_MODEL: &str = "Embeddings";

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Conversation participant role.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    /// Result of a function call fed back to the model.
    Function,
}

/// A single role/content pair.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn function(content: impl Into<String>) -> Self {
        Self {
            role: Role::Function,
            content: content.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Function calling
// ---------------------------------------------------------------------------

/// How the model may pick among the supplied functions.
///
/// Serializes as `"auto"`, `"none"`, or `{"name": "<function>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionCall {
    Auto,
    None,
    Named(String),
}

impl Serialize for FunctionCall {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Named<'a> {
            name: &'a str,
        }
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::None => serializer.serialize_str("none"),
            Self::Named(name) => Named { name }.serialize(serializer),
        }
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body for `/chat/completions`. Unset optional fields are omitted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    /// Function schemas, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
}

impl ChatRequest {
    /// Request with only a model and messages set.
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            top_p: None,
            max_tokens: None,
            stream: None,
            functions: None,
            function_call: None,
        }
    }

    /// System + user conversation with every sampling field from `options`.
    pub fn conversation(
        system_prompt: impl Into<String>,
        user_message: impl Into<String>,
        options: &GenerationOptions,
    ) -> Self {
        Self {
            temperature: Some(options.temperature),
            top_p: Some(options.top_p),
            max_tokens: Some(options.max_tokens),
            stream: Some(options.stream),
            ..Self::new(
                options.model.clone(),
                vec![Message::system(system_prompt), Message::user(user_message)],
            )
        }
    }

    /// Single user message on the pro tier with automatic function selection.
    pub fn with_functions(user_message: impl Into<String>, functions: Vec<Value>) -> Self {
        Self {
            functions: Some(functions),
            function_call: Some(FunctionCall::Auto),
            ..Self::new(PRO_MODEL, vec![Message::user(user_message)])
        }
    }
}

/// Sampling settings for `generate_response`.
///
/// Values are sent as-is; range checking is left to the remote service.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub model: String,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    pub stream: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 1024,
            stream: false,
        }
    }
}

/// Body for `/embeddings`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmbeddingsRequest {
    pub model: String,
    pub input: Vec<String>,
}
