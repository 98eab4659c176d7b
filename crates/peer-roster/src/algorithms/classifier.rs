//! Status classification
//!
//! Maps the engine's free-form status token onto the closed
//! `ConnectionState` set. An unmatched token is a normal result.

use crate::domain::ConnectionState;

/// Classify a raw status token.
///
/// Case-insensitive exact match against `idle`, `connecting`, `connected`
/// and `disconnected`. Everything else, including `None` and the empty
/// string, maps to `ConnectionState::Unknown`. Surrounding whitespace is
/// not stripped.
pub fn classify(raw: Option<&str>) -> ConnectionState {
    let Some(raw) = raw else {
        return ConnectionState::Unknown;
    };

    if raw.eq_ignore_ascii_case("idle") {
        ConnectionState::Idle
    } else if raw.eq_ignore_ascii_case("connecting") {
        ConnectionState::Connecting
    } else if raw.eq_ignore_ascii_case("connected") {
        ConnectionState::Connected
    } else if raw.eq_ignore_ascii_case("disconnected") {
        ConnectionState::Disconnected
    } else {
        ConnectionState::Unknown
    }
}
