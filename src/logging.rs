//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Env var holding the log filter; `RUST_LOG` is consulted when it is unset.
pub const LOG_ENV_VAR: &str = "GIGACHAT_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr `fmt` subscriber filtered by `GIGACHAT_LOG`/`RUST_LOG`.
///
/// `verbose` raises the fallback level to `debug` when neither is set.
pub fn setup_logging(verbose: bool) {
    let filter = filter_from_env(
        |name| std::env::var(name).ok(),
        if verbose { "debug" } else { DEFAULT_FILTER },
    );
    // A subscriber may already be installed (tests, embedding callers).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn filter_from_env<FEnv>(env_lookup: FEnv, fallback: &str) -> EnvFilter
where
    FEnv: Fn(&str) -> Option<String>,
{
    [LOG_ENV_VAR, "RUST_LOG"]
        .into_iter()
        .filter_map(|name| env_lookup(name))
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gigachat_log_wins_over_rust_log() {
        let filter = filter_from_env(
            |name| match name {
                "GIGACHAT_LOG" => Some("gigachat=trace".to_string()),
                "RUST_LOG" => Some("error".to_string()),
                _ => None,
            },
            "warn",
        );
        assert_eq!(filter.to_string(), "gigachat=trace");
    }

    #[test]
    fn falls_back_when_unset() {
        let filter = filter_from_env(|_| None, "debug");
        assert_eq!(filter.to_string(), "debug");
    }
}
