//! Ports module for the peer roster
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::PeerRosterApi;
pub use outbound::{PeerTelemetry, TelemetrySource};
