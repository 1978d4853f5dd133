//! Logging goes to stderr so command output on stdout stays machine-readable.
//!
//! `DOCSITE_LOG` takes precedence over `RUST_LOG`; without either the level is
//! `warn`, or `debug` with `--verbose`.

use tracing_subscriber::EnvFilter;

use crate::error::{CliError, Result};

const LOG_ENV_VAR: &str = "DOCSITE_LOG";

pub(crate) fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}
