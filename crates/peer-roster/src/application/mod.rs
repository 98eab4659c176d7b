//! Application layer: the roster service wiring domain, algorithms and ports.

pub mod service;

pub use service::{PeerRosterService, RefreshReport};
