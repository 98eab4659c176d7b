//! Structured logging setup.
//!
//! Pretty output for terminals, JSON for log shippers. The filter comes
//! from `TelemetryConfig::log_level`, which accepts full `EnvFilter`
//! directives.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Parse the configured level into an `EnvFilter`.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Filter(e.to_string()))
}

/// Install the global subscriber.
///
/// # Errors
///
/// `TelemetryError::Filter` for an unparsable level, `TelemetryError::Init`
/// if a global subscriber is already installed.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(config.with_target)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(config.with_target)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    }

    tracing::debug!(
        service = %config.service_name,
        level = %config.log_level,
        json_logs = config.json_logs,
        "Logging initialized"
    );

    Ok(())
}
