//! # Driven Ports (Outbound SPI)
//!
//! What the roster needs from the networking engine: a batch fetch of raw
//! per-peer snapshots. Both traits are read-only views of engine state.

use crate::domain::{FieldError, SourceError};

/// One raw telemetry snapshot as the engine exposes it.
///
/// Every accessor may fail on its own. Failures are absorbed by the
/// materializer, which substitutes the field's default; an implementation
/// should never panic instead of returning an error.
pub trait PeerTelemetry {
    /// Raw status token, e.g. `"Connected"`.
    fn conn_status(&self) -> Result<String, FieldError>;

    fn ip(&self) -> Result<String, FieldError>;

    fn fqdn(&self) -> Result<String, FieldError>;

    fn pub_key(&self) -> Result<String, FieldError>;

    fn local_ice_candidate_type(&self) -> Result<String, FieldError>;

    fn remote_ice_candidate_type(&self) -> Result<String, FieldError>;

    fn local_ice_candidate_endpoint(&self) -> Result<String, FieldError>;

    fn remote_ice_candidate_endpoint(&self) -> Result<String, FieldError>;

    /// Signed as reported by the engine; negatives are clamped to 0.
    fn bytes_rx(&self) -> Result<i64, FieldError>;

    fn bytes_tx(&self) -> Result<i64, FieldError>;

    /// Milliseconds, 0 when not measured.
    fn latency(&self) -> Result<i64, FieldError>;

    fn relayed(&self) -> Result<bool, FieldError>;

    fn direct(&self) -> Result<bool, FieldError>;

    /// Pre-formatted time of the last status change.
    fn conn_status_update(&self) -> Result<String, FieldError>;

    /// Pre-formatted time of the last WireGuard handshake.
    fn last_wireguard_handshake(&self) -> Result<String, FieldError>;

    fn rosenpass_enabled(&self) -> Result<bool, FieldError>;
}

/// Sequence fetch of peer snapshots, in engine enumeration order.
pub trait TelemetrySource {
    type Peer: PeerTelemetry;

    fn fetch_peers(&self) -> Result<Vec<Self::Peer>, SourceError>;
}
