//! Inbound Ports (Driving Ports / API)
//!
//! What a UI host calls. Every operation is synchronous and infallible.

use crate::domain::{PeerRecord, RosterCounts, StatusFilter};

/// Primary Peer Roster API
pub trait PeerRosterApi {
    /// Swap in a new batch of records. Counts reflect it immediately.
    fn replace_all(&mut self, records: Vec<PeerRecord>);

    /// Select the status filter; the search query is left alone.
    fn set_status_filter(&mut self, filter: StatusFilter);

    /// Set the search text; the status filter is left alone.
    ///
    /// Trimmed, case-insensitive. Empty text matches every record.
    fn set_search_query(&mut self, text: &str);

    /// Records passing both the status filter and the search, in roster order.
    fn visible_records(&self) -> Vec<&PeerRecord>;

    /// Counts over the full roster, independent of filter and search.
    fn counts(&self) -> RosterCounts;
}
