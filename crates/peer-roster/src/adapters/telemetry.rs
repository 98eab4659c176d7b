//! Telemetry materialization
//!
//! Turns raw engine snapshots into `PeerRecord`s. Every field goes through
//! the same defaulting accessor, so one broken field degrades to its default
//! and never takes the record or the batch down with it.

use tracing::info;

use crate::algorithms::classify;
use crate::domain::{ConnectionType, FieldError, IceCandidates, PeerRecord};
use crate::ports::outbound::PeerTelemetry;

/// Engine fields, named as the engine names them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TelemetryField {
    ConnStatus,
    Ip,
    Fqdn,
    PubKey,
    LocalIceCandidateType,
    RemoteIceCandidateType,
    LocalIceCandidateEndpoint,
    RemoteIceCandidateEndpoint,
    BytesRx,
    BytesTx,
    Latency,
    Relayed,
    Direct,
    ConnStatusUpdate,
    LastWireguardHandshake,
    RosenpassEnabled,
}

impl TelemetryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TelemetryField::ConnStatus => "connStatus",
            TelemetryField::Ip => "ip",
            TelemetryField::Fqdn => "fqdn",
            TelemetryField::PubKey => "pubKey",
            TelemetryField::LocalIceCandidateType => "localIceCandidateType",
            TelemetryField::RemoteIceCandidateType => "remoteIceCandidateType",
            TelemetryField::LocalIceCandidateEndpoint => "localIceCandidateEndpoint",
            TelemetryField::RemoteIceCandidateEndpoint => "remoteIceCandidateEndpoint",
            TelemetryField::BytesRx => "bytesRx",
            TelemetryField::BytesTx => "bytesTx",
            TelemetryField::Latency => "latency",
            TelemetryField::Relayed => "relayed",
            TelemetryField::Direct => "direct",
            TelemetryField::ConnStatusUpdate => "connStatusUpdate",
            TelemetryField::LastWireguardHandshake => "lastWireguardHandshake",
            TelemetryField::RosenpassEnabled => "rosenpassEnabled",
        }
    }
}

/// Result of materializing a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Materialized {
    pub records: Vec<PeerRecord>,
    /// Fields replaced by their default across the whole batch
    pub defaulted_fields: usize,
}

/// Defaulting accessor for one snapshot.
struct FieldReader {
    peer_index: usize,
    defaulted: usize,
}

impl FieldReader {
    fn new(peer_index: usize) -> Self {
        Self {
            peer_index,
            defaulted: 0,
        }
    }

    /// The field value, or `T::default()` when the engine failed to give one.
    fn field_or_default<T: Default>(
        &mut self,
        field: TelemetryField,
        result: Result<T, FieldError>,
    ) -> T {
        match result {
            Ok(value) => value,
            Err(error) => {
                info!(
                    peer_index = self.peer_index,
                    field = field.as_str(),
                    %error,
                    "Telemetry field unavailable, using default"
                );
                self.defaulted += 1;
                T::default()
            }
        }
    }

    /// Counter fields: defaulted like any other, then clamped at zero.
    fn counter(&mut self, field: TelemetryField, result: Result<i64, FieldError>) -> u64 {
        let raw = self.field_or_default(field, result);

        u64::try_from(raw).unwrap_or_else(|_| {
            info!(
                peer_index = self.peer_index,
                field = field.as_str(),
                value = raw,
                "Negative telemetry counter clamped to zero"
            );
            self.defaulted += 1;
            0
        })
    }
}

/// Build one record. Returns the record and how many fields were defaulted.
pub fn materialize<P: PeerTelemetry>(peer_index: usize, peer: &P) -> (PeerRecord, usize) {
    let mut reader = FieldReader::new(peer_index);

    let status_token = reader.field_or_default(TelemetryField::ConnStatus, peer.conn_status());
    let ip = reader.field_or_default(TelemetryField::Ip, peer.ip());
    let fqdn = reader.field_or_default(TelemetryField::Fqdn, peer.fqdn());
    let public_key = reader.field_or_default(TelemetryField::PubKey, peer.pub_key());

    let ice = IceCandidates {
        local_type: reader.field_or_default(
            TelemetryField::LocalIceCandidateType,
            peer.local_ice_candidate_type(),
        ),
        local_endpoint: reader.field_or_default(
            TelemetryField::LocalIceCandidateEndpoint,
            peer.local_ice_candidate_endpoint(),
        ),
        remote_type: reader.field_or_default(
            TelemetryField::RemoteIceCandidateType,
            peer.remote_ice_candidate_type(),
        ),
        remote_endpoint: reader.field_or_default(
            TelemetryField::RemoteIceCandidateEndpoint,
            peer.remote_ice_candidate_endpoint(),
        ),
    };

    let bytes_received = reader.counter(TelemetryField::BytesRx, peer.bytes_rx());
    let bytes_sent = reader.counter(TelemetryField::BytesTx, peer.bytes_tx());
    let latency = reader.counter(TelemetryField::Latency, peer.latency());

    let relayed = reader.field_or_default(TelemetryField::Relayed, peer.relayed());
    let direct = reader.field_or_default(TelemetryField::Direct, peer.direct());

    let status_update =
        reader.field_or_default(TelemetryField::ConnStatusUpdate, peer.conn_status_update());
    let handshake = reader.field_or_default(
        TelemetryField::LastWireguardHandshake,
        peer.last_wireguard_handshake(),
    );
    let rosenpass =
        reader.field_or_default(TelemetryField::RosenpassEnabled, peer.rosenpass_enabled());

    let record = PeerRecord::new(classify(Some(status_token.as_str())), ip, fqdn)
        .with_public_key(public_key)
        .with_ice_candidates(ice)
        .with_transfer(bytes_received, bytes_sent)
        .with_latency_millis(latency)
        .with_connection_type(ConnectionType::from_flags(relayed, direct))
        .with_status_update(status_update)
        .with_last_handshake(handshake)
        .with_rosenpass(rosenpass);

    (record, reader.defaulted)
}

/// Build records for a whole batch, preserving engine order.
pub fn materialize_batch<P: PeerTelemetry>(peers: &[P]) -> Materialized {
    let mut batch = Materialized {
        records: Vec::with_capacity(peers.len()),
        defaulted_fields: 0,
    };

    for (peer_index, peer) in peers.iter().enumerate() {
        let (record, defaulted) = materialize(peer_index, peer);
        batch.records.push(record);
        batch.defaulted_fields += defaulted;
    }

    batch
}
