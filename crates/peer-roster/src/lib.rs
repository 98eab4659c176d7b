//! # Peer Roster
//!
//! View-model layer for a live roster of mesh peers. Raw per-peer telemetry
//! from the networking engine goes in; a filterable, searchable,
//! display-ready record set and per-peer detail views come out.
//!
//! ## Architecture
//!
//! - **Domain**: `PeerRecord`, `ConnectionState`, `ConnectionType`, view state, invariants
//! - **Algorithms**: status classification, byte formatting, filter/search composition
//! - **Detail**: section visibility rule table and `PeerDetailView`
//! - **Ports**: Inbound (`PeerRosterApi`) and Outbound (`TelemetrySource`, `PeerTelemetry`)
//! - **Adapters**: defaulting telemetry materializer, JSON telemetry source
//! - **Application**: `PeerRosterService`
//!
//! Everything runs synchronously on the caller's thread. No operation
//! returns an error to the UI: broken telemetry fields degrade to defaults
//! and unknown status tokens become `ConnectionState::Unknown`.
//!
//! ## Example
//!
//! ```rust
//! use peer_roster::{
//!     ConnectionState, PeerRecord, PeerRosterApi, PeerRosterService, StatusFilter,
//! };
//!
//! let mut roster = PeerRosterService::new();
//! roster.replace_all(vec![
//!     PeerRecord::new(ConnectionState::Connected, "100.64.0.1", "office.mesh"),
//!     PeerRecord::new(ConnectionState::Idle, "100.64.0.2", "phone.mesh"),
//! ]);
//!
//! roster.set_status_filter(StatusFilter::Connected);
//! assert_eq!(roster.visible_records().len(), 1);
//! assert_eq!(roster.counts().total, 2);
//! ```

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod detail;
pub mod domain;
pub mod ports;

pub use adapters::{JsonTelemetrySource, Materialized, TelemetryField};
pub use algorithms::{classify, format_bytes};
pub use application::{PeerRosterService, RefreshReport};
pub use config::{DetailLabels, RosterConfig};
pub use detail::{DetailSection, PeerDetailView};
pub use domain::entities::*;
pub use domain::errors::*;
pub use domain::value_objects::*;
pub use ports::inbound::PeerRosterApi;
pub use ports::outbound::{PeerTelemetry, TelemetrySource};
