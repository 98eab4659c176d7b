//! # Roster Telemetry
//!
//! Logging setup for hosts embedding the peer roster. The roster core only
//! emits through the `tracing` facade; this crate installs the subscriber.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config).expect("Failed to init logging");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ROSTER_SERVICE_NAME` | `peer-roster` | Service name in logs |
//! | `ROSTER_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter directive |
//! | `ROSTER_JSON_LOGS` | `false` | JSON output |
//! | `ROSTER_LOG_TARGET` | `true` | Include module targets |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Log a peer-related event with standard fields.
#[macro_export]
macro_rules! log_peer_event {
    ($level:ident, $msg:expr, $fqdn:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            peer = %$fqdn,
            $($($field)*,)?
            $msg
        )
    };
}
