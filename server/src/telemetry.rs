//! Tracing subscriber initialization.
//!
//! Installs a `tracing_subscriber` registry filtered by `RUST_LOG` (falling
//! back to the configured level) with JSON or pretty stdout output.

use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::{Config, LogFormat};

/// Build the log filter: `RUST_LOG` wins over the configured level.
fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()))
}

/// Install the global `tracing` subscriber.
///
/// Must be called once, before the first span is entered.
pub fn init(config: &Config) {
    let registry = Registry::default().with(build_filter(config));

    match config.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
    }
}
