//! Structured logging setup.
//!
//! Installs a global `tracing` subscriber with an `EnvFilter` built from
//! [`TelemetryConfig::log_level`]. Output is human readable by default and
//! JSON when [`TelemetryConfig::json_logs`] is set, with consistent fields:
//! - `timestamp`
//! - `level`
//! - `target`: emitting module (e.g. `mt_credentials::schema`)
//! - `message`
//! - event fields (`component_type`, `field`, `reason`, ...)

use tracing_subscriber::EnvFilter;

use crate::{TelemetryConfig, TelemetryError};

/// Install the global subscriber.
///
/// Only the first successful call in a process takes effect; later calls
/// return [`TelemetryError::AlreadyInitialized`].
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::Config(format!("log level {:?}: {}", config.log_level, e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;

    tracing::debug!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Structured logging configured"
    );
    Ok(())
}
