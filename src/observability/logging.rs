//! # Structured Logging
//!
//! Tracing subscriber setup for hosts embedding the client. Level comes
//! from configuration unless `RUST_LOG` is set; output is compact text or
//! JSON per configuration.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

use crate::core::config::{LogConfig, LogFormat};
use crate::core::error::{ClientError, ClientResult};

/// Install the global tracing subscriber
///
/// Returns an error when a subscriber is already installed or the level
/// filter does not parse.
pub fn init_logging(config: &LogConfig) -> ClientResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ClientError::config(format!("invalid log level '{}': {e}", config.level)))?;

    let registry = Registry::default().with(filter);
    let outcome = match config.format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).try_init(),
    };

    outcome.map_err(|e| ClientError::config(format!("failed to install subscriber: {e}")))
}
