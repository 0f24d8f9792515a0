//! Parambulk - bulk get, save and compare parameter store entries.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use parambulk::cli::output;
use parambulk::cli::{execute, Cli};
use parambulk::core::constants::LOG_ENV;
use parambulk::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays eval-able
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("parambulk=debug")
        } else {
            EnvFilter::new("parambulk=warn")
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

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingStoreFile) => {
                Some("set PARAMBULK_STORE_FILE or add `file` under [store]")
            }
            Error::Config(ConfigError::BackendUnavailable(_)) => {
                Some("rebuild with --features aws, or use the file backend")
            }
            Error::Config(ConfigError::Parse(_)) => Some("check .parambulk.toml"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
