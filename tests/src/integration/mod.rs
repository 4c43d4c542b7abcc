//! Cross-crate integration flows.

pub mod credential_flows;
pub mod manifest_flows;

/// Install a debug-level subscriber once per test binary.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    let config = mt_telemetry::TelemetryConfig::for_component("tests").with_log_level("debug");
    // Another test may have installed it already.
    let _ = mt_telemetry::init_logging(&config);
}
