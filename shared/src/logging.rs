//! Logging initialization
//!
//! Installs a global `tracing` subscriber configured from [`LoggingConfig`].
//! `RUST_LOG` takes precedence over the configured level when set.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Errors raised while installing the global subscriber
#[derive(Error, Debug)]
pub enum LoggingError {
    /// A global subscriber, or the `log` bridge, is already installed
    #[error("failed to install tracing subscriber: {0}")]
    AlreadyInitialized(Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Install the global subscriber
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    installed.map_err(LoggingError::AlreadyInitialized)
}
