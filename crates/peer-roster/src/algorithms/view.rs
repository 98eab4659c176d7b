//! View computation over a roster
//!
//! Both functions are pure: the view state is passed in explicitly, so they
//! run the same inside a roster service or a bare unit test.

use crate::domain::{PeerRecord, RosterCounts, RosterView};

/// Records passing the status filter AND the search, in roster order.
pub fn visible<'a>(records: &'a [PeerRecord], view: &RosterView) -> Vec<&'a PeerRecord> {
    records
        .iter()
        .filter(|record| view.status.matches(record.status()))
        .filter(|record| view.query.matches_any(&record.search_fields()))
        .collect()
}

/// Connected and total counts over the full, unfiltered roster.
pub fn counts(records: &[PeerRecord]) -> RosterCounts {
    RosterCounts {
        connected: records
            .iter()
            .filter(|record| record.status().is_connected())
            .count(),
        total: records.len(),
    }
}
