//! omi-http: issue one request against a JSON API from the command line.

use std::path::Path;
use std::process::ExitCode;

use omi_async_http_client::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::{Outcome, config_hint, init_tracing};

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let outcome = match &cli.command {
        Some(Command::Init { output }) => init(output),
        None => request(&cli),
    };
    outcome.into()
}

fn init(output: &Path) -> Outcome {
    if let Err(e) = write_default_config(output) {
        report(&e);
        return Outcome::ConfigError;
    }
    println!("Configuration template written to: {}", output.display());
    Outcome::Success
}

/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn request(cli: &Cli) -> Outcome {
    let config = match ValidatedConfig::load(cli) {
        Ok(config) => config,
        Err(e) => {
            report(&e);
            if let Some(hint) = config_hint(&e) {
                eprintln!("\n{hint}");
            }
            return Outcome::ConfigError;
        }
    };

    init_tracing(config.verbose);
    tracing::debug!("{config}");

    // One request at a time; the blocking pool is still available.
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            report(&e);
            return Outcome::RequestFailed;
        }
    };

    let rendered = runtime
        .block_on(run::execute(config))
        .and_then(|response| run::render(&response));

    match rendered {
        Ok(body) => {
            println!("{body}");
            Outcome::Success
        }
        Err(e) => {
            eprintln!("Error: {}", run::describe_failure(&e));
            Outcome::RequestFailed
        }
    }
}

/// Prints an error and its source chain to stderr.
fn report(error: &dyn std::error::Error) {
    eprintln!("Error: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
