use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

/// Install the global tracing subscriber, writing to stderr so stdout stays machine-readable.
///
/// `RUST_LOG` replaces the default filter when set.
///
/// # Errors
///
/// Fails if a global subscriber has already been installed.
pub fn init(verbose: bool) -> Result<(), CliError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let fmt_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| CliError::telemetry(format!("failed to install tracing subscriber: {err}")))
}

/// Our own crates follow `--verbose`; dependencies stay at `warn`.
fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("warn,linkding_cli={level},linkding={level}")
}
