//! Core entities for the peer roster

use super::value_objects::{ConnectionState, ConnectionType};
use serde::Serialize;

/// ICE candidate pair negotiated for a peer. Any field may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IceCandidates {
    pub local_type: String,
    pub local_endpoint: String,
    pub remote_type: String,
    pub remote_endpoint: String,
}

/// Immutable snapshot of one peer.
///
/// Fields are only reachable through accessors. A record is assembled with
/// the consuming `with_*` builders and is never changed after it enters a
/// roster; a refresh swaps whole records instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PeerRecord {
    status: ConnectionState,
    ip: String,
    fqdn: String,
    public_key: String,
    ice: IceCandidates,
    bytes_received: u64,
    bytes_sent: u64,
    latency_millis: u64,
    connection_type: ConnectionType,
    last_status_update_text: String,
    last_handshake_text: String,
    rosenpass_enabled: bool,
}

impl PeerRecord {
    pub fn new(status: ConnectionState, ip: impl Into<String>, fqdn: impl Into<String>) -> Self {
        Self {
            status,
            ip: ip.into(),
            fqdn: fqdn.into(),
            public_key: String::new(),
            ice: IceCandidates::default(),
            bytes_received: 0,
            bytes_sent: 0,
            latency_millis: 0,
            connection_type: ConnectionType::Unknown,
            last_status_update_text: String::new(),
            last_handshake_text: String::new(),
            rosenpass_enabled: false,
        }
    }

    pub fn with_public_key(mut self, key: impl Into<String>) -> Self {
        self.public_key = key.into();
        self
    }

    pub fn with_ice_candidates(mut self, ice: IceCandidates) -> Self {
        self.ice = ice;
        self
    }

    pub fn with_transfer(mut self, bytes_received: u64, bytes_sent: u64) -> Self {
        self.bytes_received = bytes_received;
        self.bytes_sent = bytes_sent;
        self
    }

    pub fn with_latency_millis(mut self, latency: u64) -> Self {
        self.latency_millis = latency;
        self
    }

    pub fn with_connection_type(mut self, connection_type: ConnectionType) -> Self {
        self.connection_type = connection_type;
        self
    }

    pub fn with_status_update(mut self, text: impl Into<String>) -> Self {
        self.last_status_update_text = text.into();
        self
    }

    pub fn with_last_handshake(mut self, text: impl Into<String>) -> Self {
        self.last_handshake_text = text.into();
        self
    }

    pub fn with_rosenpass(mut self, enabled: bool) -> Self {
        self.rosenpass_enabled = enabled;
        self
    }

    pub fn status(&self) -> ConnectionState {
        self.status
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    pub fn fqdn(&self) -> &str {
        &self.fqdn
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn ice_candidates(&self) -> &IceCandidates {
        &self.ice
    }

    pub fn local_candidate_type(&self) -> &str {
        &self.ice.local_type
    }

    pub fn remote_candidate_type(&self) -> &str {
        &self.ice.remote_type
    }

    pub fn local_candidate_endpoint(&self) -> &str {
        &self.ice.local_endpoint
    }

    pub fn remote_candidate_endpoint(&self) -> &str {
        &self.ice.remote_endpoint
    }

    pub fn bytes_received(&self) -> u64 {
        self.bytes_received
    }

    pub fn bytes_sent(&self) -> u64 {
        self.bytes_sent
    }

    /// Round-trip latency; 0 means not measured.
    pub fn latency_millis(&self) -> u64 {
        self.latency_millis
    }

    pub fn connection_type(&self) -> ConnectionType {
        self.connection_type
    }

    pub fn is_relayed(&self) -> bool {
        self.connection_type == ConnectionType::Relayed
    }

    pub fn is_direct(&self) -> bool {
        self.connection_type == ConnectionType::Direct
    }

    pub fn last_status_update_text(&self) -> &str {
        &self.last_status_update_text
    }

    pub fn last_handshake_text(&self) -> &str {
        &self.last_handshake_text
    }

    pub fn rosenpass_enabled(&self) -> bool {
        self.rosenpass_enabled
    }

    /// Fields the roster search looks at.
    pub fn search_fields(&self) -> [&str; 3] {
        [
            self.fqdn.as_str(),
            self.ip.as_str(),
            self.public_key.as_str(),
        ]
    }
}
