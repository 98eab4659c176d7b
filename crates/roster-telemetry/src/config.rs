//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for roster logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or a full
    /// `EnvFilter` directive such as `peer_roster=debug,info`
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Whether to include the event target (module path)
    pub with_target: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "peer-roster".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            with_target: true,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ROSTER_SERVICE_NAME`: Service name (default: peer-roster)
    /// - `ROSTER_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `ROSTER_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `ROSTER_LOG_TARGET`: Include targets (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            service_name: lookup("ROSTER_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("ROSTER_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("ROSTER_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),

            with_target: lookup("ROSTER_LOG_TARGET")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.with_target),
        }
    }

    /// Override the log level, e.g. from a `--verbose` flag.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}
