//! Logging setup for the CLI.
//!
//! Log events go to stderr so that stdout carries only results. The
//! filter comes from `RUST_LOG` when set, defaulting to `info`;
//! `--verbose` forces `debug`.

use std::io;

use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Install the global tracing subscriber.
pub fn init_logging(verbose: bool) -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::LoggingInit(e.to_string()))
}

fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_selects_debug() {
        assert_eq!(filter(true).to_string(), "debug");
    }
}
