//! Display-ready detail view for one peer

use serde::Serialize;

use super::sections::{self, DetailSection};
use crate::algorithms::format_bytes;
use crate::config::DetailLabels;
use crate::domain::PeerRecord;

/// Formatted byte counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DataTransferText {
    pub received: String,
    pub sent: String,
}

/// ICE candidate text; each field falls back to the placeholder on its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IceCandidateText {
    pub local_type: String,
    pub local_endpoint: String,
    pub remote_type: String,
    pub remote_endpoint: String,
}

/// Everything the detail dialog shows for one peer.
///
/// Optional sections are `None` when their rule hides them. Build a fresh
/// view per render; it is a snapshot of the rules at build time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PeerDetailView {
    pub fqdn: String,
    pub ip: String,
    pub public_key: String,
    pub status: String,
    pub connection_type: String,
    pub latency: Option<String>,
    pub data_transfer: Option<DataTransferText>,
    pub ice_candidates: Option<IceCandidateText>,
    pub handshake: Option<String>,
    pub status_update: Option<String>,
    pub quantum_resistance: Option<String>,
}

impl PeerDetailView {
    pub fn build(record: &PeerRecord, labels: &DetailLabels) -> Self {
        let or_placeholder = |value: &str| {
            if value.is_empty() {
                labels.not_available.clone()
            } else {
                value.to_string()
            }
        };

        let latency = sections::shows_latency(record)
            .then(|| format!("{} ms", record.latency_millis()));

        let data_transfer = sections::shows_data_transfer(record).then(|| DataTransferText {
            received: format_bytes(record.bytes_received()),
            sent: format_bytes(record.bytes_sent()),
        });

        let ice_candidates = sections::shows_ice_candidates(record).then(|| IceCandidateText {
            local_type: or_placeholder(record.local_candidate_type()),
            local_endpoint: or_placeholder(record.local_candidate_endpoint()),
            remote_type: or_placeholder(record.remote_candidate_type()),
            remote_endpoint: or_placeholder(record.remote_candidate_endpoint()),
        });

        let handshake = sections::shows_handshake(record)
            .then(|| record.last_handshake_text().to_string());

        let status_update = sections::shows_status_update(record)
            .then(|| record.last_status_update_text().to_string());

        let quantum_resistance = sections::shows_quantum_resistance(record).then(|| {
            if record.rosenpass_enabled() {
                labels.rosenpass_enabled.clone()
            } else {
                labels.rosenpass_disabled.clone()
            }
        });

        Self {
            fqdn: record.fqdn().to_string(),
            ip: record.ip().to_string(),
            public_key: or_placeholder(record.public_key()),
            status: record.status().label().to_string(),
            connection_type: record.connection_type().label().to_string(),
            latency,
            data_transfer,
            ice_candidates,
            handshake,
            status_update,
            quantum_resistance,
        }
    }

    /// Whether `section` made it into this view.
    pub fn shows(&self, section: DetailSection) -> bool {
        match section {
            DetailSection::Latency => self.latency.is_some(),
            DetailSection::DataTransfer => self.data_transfer.is_some(),
            DetailSection::IceCandidates => self.ice_candidates.is_some(),
            DetailSection::Handshake => self.handshake.is_some(),
            DetailSection::StatusUpdate => self.status_update.is_some(),
            DetailSection::QuantumResistance => self.quantum_resistance.is_some(),
        }
    }

    /// Visible sections, in rule-table order.
    pub fn visible_sections(&self) -> Vec<DetailSection> {
        sections::SECTION_RULES
            .iter()
            .map(|(section, _)| *section)
            .filter(|section| self.shows(*section))
            .collect()
    }
}
