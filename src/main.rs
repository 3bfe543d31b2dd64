//! depvar - Manage deployment environment variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use depvar::cli::output;
use depvar::cli::{execute, Cli};
use depvar::core::constants::LOG_ENV;
use depvar::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("depvar=debug")
        } else {
            EnvFilter::new("depvar=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.state) {
        let suggestion = match &e {
            Error::Config(ConfigError::NotInitialized { .. }) => {
                Some("run: depvar deployment create <LABEL>".to_string())
            }
            Error::Deployment(err) => err.hint(),
            Error::Backend(_) => Some("the deployment was not changed".to_string()),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
