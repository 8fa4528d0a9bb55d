//! Logging setup
//!
//! The library only emits `tracing` events. Applications that do not set
//! up their own subscriber can call [`init_logging`].

use std::sync::Once;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::defaults::DEFAULT_LOG_FILTER;

static LOGGING_INIT: Once = Once::new();

/// Logging initialization errors
#[derive(Error, Debug)]
pub enum LoggingError {
    /// A global subscriber was already installed elsewhere
    #[error("Failed to initialize logging: {error}")]
    Init { error: String },
}

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `warn`)
///
/// Repeated calls are treated as no-ops once the first call has run.
pub fn init_logging() -> Result<(), LoggingError> {
    let mut init_result = Ok(());

    LOGGING_INIT.call_once(|| {
        init_result = tracing_subscriber::fmt()
            .with_env_filter(default_env_filter())
            .try_init()
            .map_err(|e| LoggingError::Init {
                error: e.to_string(),
            });
    });

    init_result
}

fn default_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
