//! Logging infrastructure for the abacus binaries.
//!
//! Console-only structured logging via the `tracing` ecosystem. Output goes
//! to stderr so stdout stays clean for rendered reports. The filter can be
//! overridden with the `ABACUS_LOG` environment variable.
//!
//! ## Example
//!
//! ```no_run
//! use abacus_core::logging;
//!
//! // Initialize logging (call once at startup)
//! logging::init_logging(0);
//!
//! tracing::debug!("abacus started");
//! ```

use tracing_subscriber::EnvFilter;

/// Environment variable consulted for a custom log filter.
pub const LOG_ENV_VAR: &str = "ABACUS_LOG";

/// Initialize console logging to stderr.
///
/// `verbosity` is the count of `-v` flags: 0 = warn, 1 = debug, 2+ = trace.
/// `ABACUS_LOG` overrides the default filter entirely.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(format!("abacus={default_level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity > 0)
        .compact()
        .try_init();
}

/// Initialize minimal console-only logging for testing.
///
/// Logs everything at debug level through the test writer so output is
/// captured per test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
