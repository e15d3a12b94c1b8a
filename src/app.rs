//! Process-level plumbing for the binary: outcomes, hints and logging.

use std::process::ExitCode;

use omi_async_http_client::config::{ConfigError, field};
use tracing_subscriber::EnvFilter;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exit code 0.
    Success,
    /// Exit code 1: bad arguments, bad config file, missing values.
    ConfigError,
    /// Exit code 2: the request failed or its response was rejected.
    RequestFailed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Self::SUCCESS,
            Outcome::ConfigError => Self::FAILURE,
            Outcome::RequestFailed => Self::from(2_u8),
        }
    }
}

/// Suggests a next step for configuration errors that have an obvious one.
pub fn config_hint(error: &ConfigError) -> Option<&'static str> {
    const INIT: &str = "Run 'omi-http init' to generate a configuration template.";

    match error {
        ConfigError::Read { .. } => Some(INIT),
        ConfigError::MissingRequired { field: f, .. } if *f == field::BASE_URL => Some(INIT),
        ConfigError::MissingRequired { .. } => Some("Usage: omi-http [OPTIONS] <METHOD> <PATH>"),
        _ => None,
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
/// Output goes to stderr, leaving stdout for the response body.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
