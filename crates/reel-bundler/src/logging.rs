//! Logging utilities for reel-bundler.
//!
//! This module is only available with the `logging` feature.
//!
//! For library users: reel emits tracing events, install your own
//! subscriber. For application developers: use these convenience
//! functions.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use reel_core::LogLevel;

static INIT: Once = Once::new();

/// Tracing filter directive for a console log level.
fn filter_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Silent => "off",
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Verbose => "debug",
    }
}

/// Initialize logging with the specified level.
///
/// Sets the console-logger threshold and installs a global tracing
/// subscriber. The subscriber can only be installed once per process;
/// later calls still update the console threshold.
///
/// # Example
///
/// ```rust,no_run
/// use reel_bundler::logging::init_logging;
/// use reel_core::LogLevel;
///
/// init_logging(LogLevel::Verbose);
/// ```
pub fn init_logging(level: LogLevel) {
    reel_core::log::set_level(level);

    INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(filter_directive(level).parse().unwrap())
            .from_env_lossy();

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_target(false).without_time())
            .init();
    });
}

/// Initialize logging from the RUST_LOG environment variable.
///
/// Falls back to the info level if RUST_LOG is not set or invalid.
///
/// # Example
///
/// ```rust,no_run
/// use reel_bundler::logging::init_logging_from_env;
///
/// init_logging_from_env();
/// ```
pub fn init_logging_from_env() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::builder()
                .with_default_directive("info".parse().unwrap())
                .from_env_lossy()
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_target(false).without_time())
            .init();
    });
}
