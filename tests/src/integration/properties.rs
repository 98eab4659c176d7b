//! Roster-level property tests
//!
//! Random rosters and view states pushed through `PeerRosterService`,
//! checked against the domain invariants.

#[cfg(test)]
mod tests {
    use peer_roster::domain::invariants::{
        invariant_completeness, invariant_counts_consistent, invariant_order_preserved,
        invariant_view_respected,
    };
    use peer_roster::{
        ConnectionState, PeerRecord, PeerRosterApi, PeerRosterService, StatusFilter,
    };
    use proptest::prelude::*;

    fn arb_state() -> impl Strategy<Value = ConnectionState> {
        prop::sample::select(ConnectionState::ALL.to_vec())
    }

    fn arb_filter() -> impl Strategy<Value = StatusFilter> {
        prop::sample::select(vec![
            StatusFilter::All,
            StatusFilter::Idle,
            StatusFilter::Connecting,
            StatusFilter::Connected,
        ])
    }

    fn arb_record() -> impl Strategy<Value = PeerRecord> {
        (arb_state(), 1u8..=254, "[a-z]{1,6}", "[A-Za-z0-9]{0,8}").prop_map(
            |(state, host, name, key)| {
                PeerRecord::new(state, format!("100.64.0.{host}"), format!("{name}.mesh"))
                    .with_public_key(key)
            },
        )
    }

    fn arb_roster() -> impl Strategy<Value = Vec<PeerRecord>> {
        prop::collection::vec(arb_record(), 0..24)
    }

    /// Queries that sometimes hit: fragments of names, IPs and keys plus noise.
    fn arb_query() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            "[a-z]{1,2}",
            "[A-Z]{1,2}",
            Just("mesh".to_string()),
            Just(" 100.64 ".to_string()),
            "[0-9]{1,2}",
        ]
    }

    fn roster_with(
        records: Vec<PeerRecord>,
        filter: StatusFilter,
        query: &str,
    ) -> PeerRosterService {
        let mut roster = PeerRosterService::new();
        roster.replace_all(records);
        roster.set_status_filter(filter);
        roster.set_search_query(query);
        roster
    }

    proptest! {
        #[test]
        fn prop_visible_is_exact_ordered_selection(
            records in arb_roster(),
            filter in arb_filter(),
            query in arb_query(),
        ) {
            let roster = roster_with(records, filter, &query);
            let visible = roster.visible_records();

            prop_assert!(invariant_order_preserved(roster.records(), &visible));
            prop_assert!(invariant_view_respected(&visible, roster.view()));
            prop_assert!(invariant_completeness(roster.records(), &visible, roster.view()));
        }

        #[test]
        fn prop_counts_ignore_view(
            records in arb_roster(),
            filter in arb_filter(),
            query in arb_query(),
        ) {
            let unfiltered = roster_with(records.clone(), StatusFilter::All, "");
            let narrowed = roster_with(records, filter, &query);

            prop_assert_eq!(unfiltered.counts(), narrowed.counts());
            prop_assert!(invariant_counts_consistent(narrowed.records(), narrowed.counts()));
        }

        #[test]
        fn prop_axes_commute(
            records in arb_roster(),
            filter in arb_filter(),
            query in arb_query(),
        ) {
            let mut filter_first = PeerRosterService::new();
            filter_first.replace_all(records.clone());
            filter_first.set_status_filter(filter);
            filter_first.set_search_query(&query);

            let mut search_first = PeerRosterService::new();
            search_first.replace_all(records);
            search_first.set_search_query(&query);
            search_first.set_status_filter(filter);

            prop_assert_eq!(filter_first.visible_records(), search_first.visible_records());
        }

        #[test]
        fn prop_setters_are_idempotent(
            records in arb_roster(),
            filter in arb_filter(),
            query in arb_query(),
        ) {
            let mut roster = roster_with(records, filter, &query);
            let once: Vec<PeerRecord> =
                roster.visible_records().into_iter().cloned().collect();

            roster.set_status_filter(filter);
            roster.set_search_query(&query);
            let twice: Vec<PeerRecord> =
                roster.visible_records().into_iter().cloned().collect();

            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_detail_exists_for_every_visible_position(
            records in arb_roster(),
            filter in arb_filter(),
        ) {
            let roster = roster_with(records, filter, "");
            let visible = roster.visible_records().len();

            for position in 0..visible {
                prop_assert!(roster.detail(position).is_some());
            }
            prop_assert!(roster.detail(visible).is_none());
        }
    }
}
