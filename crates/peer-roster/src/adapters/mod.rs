//! Adapters: concrete implementations for the outbound ports
//!
//! - `telemetry`: defaulting materializer from raw snapshots to records
//! - `json_source`: `TelemetrySource` over an engine JSON dump

pub mod json_source;
pub mod telemetry;

pub use json_source::{JsonPeer, JsonTelemetrySource};
pub use telemetry::{materialize, materialize_batch, Materialized, TelemetryField};
