//! Tracing setup for the `cashflow` binary
//!
//! Library code only emits events; the subscriber is installed once by the
//! binary and writes to stderr so stdout stays clean for CSV/JSON output.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "CASHFLOW_LOG";

const DEFAULT_FILTER: &str = "cashflow_forecast=warn";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber
///
/// `verbose` raises the crate's default level to `debug` when `CASHFLOW_LOG`
/// is not set. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default_filter = if verbose {
            "cashflow_forecast=debug"
        } else {
            DEFAULT_FILTER
        };
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

        // Another subscriber may already be installed (e.g. by an embedding app)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
