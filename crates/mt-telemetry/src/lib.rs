//! # MT Telemetry
//!
//! Logging setup for binaries and test suites that consume the
//! Monkey-Types crates. The library crates only emit `tracing` events;
//! installing a subscriber is the consumer's call.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mt_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_logging(&config).expect("Failed to init logging");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `monkey-types` | Service name in logs |
//! | `MT_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter |
//! | `MT_JSON_LOGS` | `false` | JSON output |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),

    /// Configuration could not be applied.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
