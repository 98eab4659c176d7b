//! Value objects for the peer roster

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ParseFilterError;

/// Connection state of a peer as reported by the engine.
///
/// Built from raw tokens by [`crate::algorithms::classify`]; any token
/// outside the known set lands on `Unknown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    Idle,
    Connecting,
    Connected,
    Disconnected,
    Unknown,
}

impl ConnectionState {
    /// All states, in engine order.
    pub const ALL: [ConnectionState; 5] = [
        ConnectionState::Idle,
        ConnectionState::Connecting,
        ConnectionState::Connected,
        ConnectionState::Disconnected,
        ConnectionState::Unknown,
    ];

    /// Lowercase engine token.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionState::Idle => "idle",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Connected => "connected",
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Unknown => "unknown",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionState::Idle => "Idle",
            ConnectionState::Connecting => "Connecting",
            ConnectionState::Connected => "Connected",
            ConnectionState::Disconnected => "Disconnected",
            ConnectionState::Unknown => "Unknown",
        }
    }

    pub fn is_connected(&self) -> bool {
        *self == ConnectionState::Connected
    }
}

impl From<&str> for ConnectionState {
    fn from(raw: &str) -> Self {
        crate::algorithms::classify(Some(raw))
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How traffic reaches a peer.
///
/// Decided once when a record is built. Relayed wins when the engine
/// reports both flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    Relayed,
    Direct,
    #[default]
    Unknown,
}

impl ConnectionType {
    /// Collapse the engine's two flags into one variant.
    pub fn from_flags(relayed: bool, direct: bool) -> Self {
        if relayed {
            ConnectionType::Relayed
        } else if direct {
            ConnectionType::Direct
        } else {
            ConnectionType::Unknown
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConnectionType::Relayed => "Relayed",
            ConnectionType::Direct => "Direct (P2P)",
            ConnectionType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status filter selectable by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Idle,
    Connecting,
    Connected,
}

impl StatusFilter {
    /// `All` passes every state; the rest require an exact match.
    pub fn matches(&self, state: ConnectionState) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Idle => state == ConnectionState::Idle,
            StatusFilter::Connecting => state == ConnectionState::Connecting,
            StatusFilter::Connected => state == ConnectionState::Connected,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Idle => "idle",
            StatusFilter::Connecting => "connecting",
            StatusFilter::Connected => "connected",
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "idle" => Ok(StatusFilter::Idle),
            "connecting" => Ok(StatusFilter::Connecting),
            "connected" => Ok(StatusFilter::Connected),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search text, trimmed and lowercased once on construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        Self(text.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring test against any of `fields`.
    ///
    /// An empty query matches regardless of the fields.
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        if self.is_empty() {
            return true;
        }
        fields
            .iter()
            .any(|field| field.to_lowercase().contains(self.0.as_str()))
    }
}

/// Active view state of a roster: the two independent filter axes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterView {
    pub status: StatusFilter,
    pub query: SearchQuery,
}

impl RosterView {
    pub fn new(status: StatusFilter, query: &str) -> Self {
        Self {
            status,
            query: SearchQuery::new(query),
        }
    }
}

/// Aggregate counts over the full roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RosterCounts {
    pub connected: usize,
    pub total: usize,
}
