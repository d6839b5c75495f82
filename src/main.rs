//! Wallet recovery - resolve BitGo wallet recovery parameters.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wallet_recovery::cli::output;
use wallet_recovery::cli::{execute, Cli, LogFormat};
use wallet_recovery::core::constants::LOG_ENV;
use wallet_recovery::error::Error;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_format);

    if let Err(e) = execute(cli.command) {
        let hint = match &e {
            Error::Config(config) => config.hint(),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = hint {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber on stderr.
///
/// `WALLET_RECOVERY_LOG` overrides the filter; otherwise `--verbose`
/// selects between debug and warn for this crate.
fn init_logging(verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("wallet_recovery=debug")
        } else {
            EnvFilter::new("wallet_recovery=warn")
        }
    });

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .init(),
    }
}
