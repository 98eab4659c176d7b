//! JSON telemetry source
//!
//! Reads an engine status dump. The document is either an array of peer
//! objects or an object with a `peers` array:
//!
//! ```json
//! { "peers": [
//!     { "connStatus": "Connected", "ip": "100.64.0.1", "fqdn": "a.mesh",
//!       "pubKey": "...", "bytesRx": 1024, "bytesTx": 0, "latency": 12,
//!       "relayed": false, "direct": true, "rosenpassEnabled": false }
//! ] }
//! ```
//!
//! A peer entry that is not an object is kept as a peer with no fields, so
//! it materializes to an all-default record instead of failing the batch.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use super::telemetry::TelemetryField;
use crate::domain::{FieldError, SourceError};
use crate::ports::outbound::{PeerTelemetry, TelemetrySource};

/// One peer object from the dump.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonPeer {
    fields: Map<String, Value>,
}

impl JsonPeer {
    pub fn new(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    fn value(&self, field: TelemetryField) -> Result<&Value, FieldError> {
        match self.fields.get(field.as_str()) {
            None | Some(Value::Null) => Err(FieldError::Missing),
            Some(value) => Ok(value),
        }
    }

    fn string(&self, field: TelemetryField) -> Result<String, FieldError> {
        self.value(field)?
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| FieldError::Malformed(format!("{} is not a string", field.as_str())))
    }

    fn integer(&self, field: TelemetryField) -> Result<i64, FieldError> {
        self.value(field)?.as_i64().ok_or_else(|| {
            FieldError::Malformed(format!("{} is not a 64-bit integer", field.as_str()))
        })
    }

    fn flag(&self, field: TelemetryField) -> Result<bool, FieldError> {
        self.value(field)?
            .as_bool()
            .ok_or_else(|| FieldError::Malformed(format!("{} is not a boolean", field.as_str())))
    }
}

impl PeerTelemetry for JsonPeer {
    fn conn_status(&self) -> Result<String, FieldError> {
        self.string(TelemetryField::ConnStatus)
    }

    fn ip(&self) -> Result<String, FieldError> {
        self.string(TelemetryField::Ip)
    }

    fn fqdn(&self) -> Result<String, FieldError> {
        self.string(TelemetryField::Fqdn)
    }

    fn pub_key(&self) -> Result<String, FieldError> {
        self.string(TelemetryField::PubKey)
    }

    fn local_ice_candidate_type(&self) -> Result<String, FieldError> {
        self.string(TelemetryField::LocalIceCandidateType)
    }

    fn remote_ice_candidate_type(&self) -> Result<String, FieldError> {
        self.string(TelemetryField::RemoteIceCandidateType)
    }

    fn local_ice_candidate_endpoint(&self) -> Result<String, FieldError> {
        self.string(TelemetryField::LocalIceCandidateEndpoint)
    }

    fn remote_ice_candidate_endpoint(&self) -> Result<String, FieldError> {
        self.string(TelemetryField::RemoteIceCandidateEndpoint)
    }

    fn bytes_rx(&self) -> Result<i64, FieldError> {
        self.integer(TelemetryField::BytesRx)
    }

    fn bytes_tx(&self) -> Result<i64, FieldError> {
        self.integer(TelemetryField::BytesTx)
    }

    fn latency(&self) -> Result<i64, FieldError> {
        self.integer(TelemetryField::Latency)
    }

    fn relayed(&self) -> Result<bool, FieldError> {
        self.flag(TelemetryField::Relayed)
    }

    fn direct(&self) -> Result<bool, FieldError> {
        self.flag(TelemetryField::Direct)
    }

    fn conn_status_update(&self) -> Result<String, FieldError> {
        self.string(TelemetryField::ConnStatusUpdate)
    }

    fn last_wireguard_handshake(&self) -> Result<String, FieldError> {
        self.string(TelemetryField::LastWireguardHandshake)
    }

    fn rosenpass_enabled(&self) -> Result<bool, FieldError> {
        self.flag(TelemetryField::RosenpassEnabled)
    }
}

/// Telemetry source backed by a JSON document.
///
/// The document is parsed on every fetch, so a host can swap it with
/// [`JsonTelemetrySource::set_document`] between refreshes.
#[derive(Clone, Debug, Default)]
pub struct JsonTelemetrySource {
    document: String,
}

impl JsonTelemetrySource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }

    /// Read the dump from a file.
    ///
    /// # Errors
    ///
    /// `SourceError::Unavailable` if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let document = fs::read_to_string(path.as_ref()).map_err(|e| {
            SourceError::Unavailable(format!("{}: {}", path.as_ref().display(), e))
        })?;

        Ok(Self::new(document))
    }

    pub fn set_document(&mut self, document: impl Into<String>) {
        self.document = document.into();
    }
}

impl TelemetrySource for JsonTelemetrySource {
    type Peer = JsonPeer;

    fn fetch_peers(&self) -> Result<Vec<JsonPeer>, SourceError> {
        let root: Value =
            serde_json::from_str(&self.document).map_err(|e| SourceError::Decode(e.to_string()))?;

        let entries = match root {
            Value::Array(entries) => entries,
            Value::Object(mut object) => match object.remove("peers") {
                Some(Value::Array(entries)) => entries,
                Some(Value::Null) | None => Vec::new(),
                Some(_) => {
                    return Err(SourceError::Decode("`peers` is not an array".to_string()));
                }
            },
            _ => {
                return Err(SourceError::Decode(
                    "expected an array or an object with `peers`".to_string(),
                ));
            }
        };

        Ok(entries.into_iter().map(JsonPeer::new).collect())
    }
}
