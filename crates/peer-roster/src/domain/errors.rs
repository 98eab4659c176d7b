//! Error types for the peer roster
//!
//! None of these reach the roster's callers. Field and source faults are
//! absorbed while a batch is materialized; config and filter errors are only
//! returned to hosts that explicitly load config or parse a filter name.

use thiserror::Error;

/// A single telemetry field could not be read from an engine snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Field absent or null
    #[error("field missing")]
    Missing,

    /// Field present but of the wrong shape
    #[error("field malformed: {0}")]
    Malformed(String),

    /// The engine failed while producing the field
    #[error("field unavailable: {0}")]
    Unavailable(String),
}

/// The engine could not produce a batch of snapshots at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("telemetry source unavailable: {0}")]
    Unavailable(String),

    #[error("failed to decode telemetry: {0}")]
    Decode(String),
}

/// Errors that can occur during config loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Unknown status filter name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status filter '{0}' (expected all, idle, connecting or connected)")]
pub struct ParseFilterError(pub String);
