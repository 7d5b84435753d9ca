//! CLI entry point for gigachat.

mod cli;

use clap::Parser;
use gigachat::api::GigaChatClient;
use gigachat::config::{load_config, Config};
use gigachat::logging::setup_logging;
use gigachat::types::GenerationOptions;
use serde_json::Value;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::Args::parse();
    setup_logging(args.verbose);

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    apply_cli_overrides(&mut config, &args);

    let mut client = match GigaChatClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&mut client, &config, args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn apply_cli_overrides(config: &mut Config, args: &cli::Args) {
    if let Some(scope) = &args.scope {
        config.auth.scope = scope.clone();
    }
    if args.insecure {
        config.api.insecure_skip_tls_verify = true;
    }
}

async fn run(
    client: &mut GigaChatClient,
    config: &Config,
    command: cli::Command,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        cli::Command::Token { show } => {
            let token = client.refresh_token().await?;
            println!("expires_at: {}", token.expires_at_millis());
            if show {
                println!("access_token: {}", token.value());
            }
        }
        cli::Command::Chat {
            message,
            system,
            model,
            temperature,
            top_p,
            max_tokens,
        } => {
            let options = GenerationOptions {
                model: model.unwrap_or_else(|| config.api.model.clone()),
                temperature,
                top_p,
                max_tokens,
                stream: false,
            };
            let reply = client.generate_response(&system, &message, &options).await?;
            print_json(&reply)?;
        }
        cli::Command::Functions { message, schema } => {
            let text = std::fs::read_to_string(&schema)
                .map_err(|e| format!("failed to read `{}`: {e}", schema.display()))?;
            let functions: Vec<Value> = serde_json::from_str(&text).map_err(|e| {
                format!(
                    "`{}` must hold a JSON array of function schemas: {e}",
                    schema.display()
                )
            })?;
            let reply = client.call_with_functions(&message, &functions).await?;
            print_json(&reply)?;
        }
        cli::Command::Embed { texts, model } => {
            let reply = client.create_embeddings(&texts, &model).await?;
            print_json(&reply)?;
        }
    }
    Ok(())
}

fn print_json(value: &Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
