//! Tracing setup.
//!
//! The gateway reads its configuration once at startup and never
//! reloads it, so the subscriber is installed once with the configured
//! level baked into the filter.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use smartlink_config::LoggingConfig;

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured level so operators can raise verbosity per target without
/// editing the config file. Safe to call more than once; later calls
/// are ignored, which keeps integration tests from fighting over the
/// global subscriber.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();
}
