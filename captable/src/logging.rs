//! Diagnostics setup for the `captable` binary.
//!
//! Diagnostics always go to standard error; standard output carries only
//! what the driver writes.

use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is unset or invalid.
    pub level: Level,
    /// Include the event target in each line.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_target: false,
        }
    }
}

/// Install a global fmt subscriber writing to standard error.
///
/// Does nothing if a global subscriber is already installed.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::builder()
        .with_default_directive(config.level.into())
        .from_env_lossy();

    let layer = fmt::layer()
        .with_target(config.with_target)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
