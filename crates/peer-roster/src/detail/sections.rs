//! Visibility rules for the optional detail sections
//!
//! One predicate per section, kept independent of each other so every rule
//! can be exercised on its own. Nothing here is cached; callers re-evaluate
//! on every render.

use serde::Serialize;

use crate::domain::{ConnectionState, PeerRecord};

/// Optional sections of a peer's detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailSection {
    Latency,
    DataTransfer,
    IceCandidates,
    Handshake,
    StatusUpdate,
    QuantumResistance,
}

/// Section predicate.
pub type SectionRule = fn(&PeerRecord) -> bool;

/// Rule table, in display order.
pub const SECTION_RULES: [(DetailSection, SectionRule); 6] = [
    (DetailSection::Latency, shows_latency),
    (DetailSection::DataTransfer, shows_data_transfer),
    (DetailSection::IceCandidates, shows_ice_candidates),
    (DetailSection::Handshake, shows_handshake),
    (DetailSection::StatusUpdate, shows_status_update),
    (DetailSection::QuantumResistance, shows_quantum_resistance),
];

impl DetailSection {
    /// Evaluate this section's rule against `record`.
    pub fn is_visible(&self, record: &PeerRecord) -> bool {
        SECTION_RULES
            .iter()
            .find(|(section, _)| section == self)
            .is_some_and(|(_, rule)| rule(record))
    }
}

fn is_connected(record: &PeerRecord) -> bool {
    record.status() == ConnectionState::Connected
}

/// Measured latency on a connected peer.
pub fn shows_latency(record: &PeerRecord) -> bool {
    record.latency_millis() > 0 && is_connected(record)
}

/// Connected and at least one counter moved.
pub fn shows_data_transfer(record: &PeerRecord) -> bool {
    is_connected(record) && (record.bytes_received() > 0 || record.bytes_sent() > 0)
}

/// Connected and at least one side reported a candidate type.
pub fn shows_ice_candidates(record: &PeerRecord) -> bool {
    is_connected(record)
        && (!record.local_candidate_type().is_empty()
            || !record.remote_candidate_type().is_empty())
}

pub fn shows_handshake(record: &PeerRecord) -> bool {
    is_connected(record) && !record.last_handshake_text().is_empty()
}

/// Not gated on status: a disconnected peer still explains why.
pub fn shows_status_update(record: &PeerRecord) -> bool {
    !record.last_status_update_text().is_empty()
}

pub fn shows_quantum_resistance(record: &PeerRecord) -> bool {
    is_connected(record)
}

/// Sections visible for `record`, in table order.
pub fn visible_sections(record: &PeerRecord) -> Vec<DetailSection> {
    SECTION_RULES
        .iter()
        .filter(|(_, rule)| rule(record))
        .map(|(section, _)| *section)
        .collect()
}
