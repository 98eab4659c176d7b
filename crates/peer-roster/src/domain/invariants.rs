//! Domain invariants for the peer roster

use super::entities::PeerRecord;
use super::value_objects::{RosterCounts, RosterView};

/// INVARIANT-1: Stable Filtering
/// The visible list is a subsequence of the roster, in roster order.
/// Identity is by address, so two equal records are still told apart.
pub fn invariant_order_preserved(roster: &[PeerRecord], visible: &[&PeerRecord]) -> bool {
    let mut remaining = roster.iter();

    visible
        .iter()
        .all(|shown| remaining.any(|record| std::ptr::eq(record, *shown)))
}

/// INVARIANT-2: View Respected
/// Every visible record passes both the status filter and the search.
pub fn invariant_view_respected(visible: &[&PeerRecord], view: &RosterView) -> bool {
    visible.iter().all(|record| {
        view.status.matches(record.status()) && view.query.matches_any(&record.search_fields())
    })
}

/// INVARIANT-3: Completeness
/// No roster record that passes the view is missing from the visible list.
pub fn invariant_completeness(
    roster: &[PeerRecord],
    visible: &[&PeerRecord],
    view: &RosterView,
) -> bool {
    let expected = roster
        .iter()
        .filter(|record| {
            view.status.matches(record.status())
                && view.query.matches_any(&record.search_fields())
        })
        .count();

    expected == visible.len()
}

/// INVARIANT-4: Counts Cover The Whole Roster
/// Counts ignore the view and are bounded by the roster size.
pub fn invariant_counts_consistent(roster: &[PeerRecord], counts: RosterCounts) -> bool {
    let connected = roster
        .iter()
        .filter(|record| record.status().is_connected())
        .count();

    counts.total == roster.len() && counts.connected == connected && connected <= roster.len()
}
