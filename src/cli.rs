//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Talk to the GigaChat API from the terminal.
#[derive(Debug, Parser)]
#[command(name = "gigachat", version)]
pub struct Args {
    /// Path to config file (default: ./gigachat.toml or ~/.config/gigachat/gigachat.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Override the requested access scope.
    #[arg(long = "scope", global = true)]
    pub scope: Option<String>,

    /// Accept any TLS certificate. Only for endpoints you trust by other means.
    #[arg(long = "insecure", global = true)]
    pub insecure: bool,

    /// Log request activity to stderr.
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Obtain an access token and print its expiry.
    Token {
        /// Also print the bearer token itself.
        #[arg(long = "show")]
        show: bool,
    },
    /// Ask a question under a system prompt.
    Chat {
        /// User message.
        message: String,
        /// System prompt.
        #[arg(short = 's', long = "system", default_value = "You are a helpful assistant.")]
        system: String,
        /// Model name (defaults to the configured model).
        #[arg(short = 'm', long = "model")]
        model: Option<String>,
        #[arg(long = "temperature", default_value_t = 0.7)]
        temperature: f64,
        #[arg(long = "top-p", default_value_t = 0.9)]
        top_p: f64,
        #[arg(long = "max-tokens", default_value_t = 1024)]
        max_tokens: u32,
    },
    /// Send a message with function schemas and let the model pick one.
    Functions {
        /// User message.
        message: String,
        /// JSON file holding an array of function schemas.
        #[arg(long = "schema")]
        schema: PathBuf,
    },
    /// Compute embeddings for one or more texts.
    Embed {
        #[arg(required = true)]
        texts: Vec<String>,
        #[arg(short = 'm', long = "model", default_value = "Embeddings")]
        model: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{Args, Command};
    use clap::Parser;

    #[test]
    fn chat_defaults_match_client_defaults() {
        let args = Args::parse_from(["gigachat", "chat", "Hi"]);
        match args.command {
            Command::Chat {
                message,
                model,
                temperature,
                top_p,
                max_tokens,
                ..
            } => {
                assert_eq!(message, "Hi");
                assert!(model.is_none());
                assert_eq!(temperature, 0.7);
                assert_eq!(top_p, 0.9);
                assert_eq!(max_tokens, 1024);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let args = Args::parse_from(["gigachat", "token", "--insecure", "--scope", "GIGACHAT_API_CORP"]);
        assert!(args.insecure);
        assert_eq!(args.scope.as_deref(), Some("GIGACHAT_API_CORP"));
        assert!(matches!(args.command, Command::Token { show: false }));
    }

    #[test]
    fn embed_requires_text() {
        assert!(Args::try_parse_from(["gigachat", "embed"]).is_err());
        let args = Args::parse_from(["gigachat", "embed", "a", "b"]);
        assert!(matches!(args.command, Command::Embed { ref texts, .. } if texts.len() == 2));
    }
}
