//! Peer Roster Service
//!
//! Main service implementing PeerRosterApi.

use crate::adapters::telemetry::materialize_batch;
use crate::algorithms::view;
use crate::config::{DetailLabels, RosterConfig};
use crate::detail::PeerDetailView;
use crate::domain::{PeerRecord, RosterCounts, RosterView, SearchQuery, StatusFilter};
use crate::ports::inbound::PeerRosterApi;
use crate::ports::outbound::TelemetrySource;

use tracing::{debug, warn};

/// Outcome of a refresh from a telemetry source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Records now held by the roster
    pub peers: usize,
    /// Fields replaced by defaults during materialization
    pub defaulted_fields: usize,
    /// The fetch failed and the previous roster was kept
    pub source_failed: bool,
}

/// Peer Roster Service
///
/// Owns the records of one UI session plus the view state. A refresh
/// replaces the records; filter and query survive until the user changes
/// them.
#[derive(Debug, Default)]
pub struct PeerRosterService {
    records: Vec<PeerRecord>,
    view: RosterView,
    labels: DetailLabels,
}

impl PeerRosterService {
    /// Create an empty roster with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty roster seeded from `config`
    pub fn with_config(config: RosterConfig) -> Self {
        Self {
            records: Vec::new(),
            view: RosterView::new(config.initial_filter, &config.initial_query),
            labels: config.labels,
        }
    }

    /// Fetch, materialize and swap in a new batch.
    ///
    /// Never fails. When the fetch itself fails the current roster is kept.
    pub fn refresh_from<S: TelemetrySource>(&mut self, source: &S) -> RefreshReport {
        let peers = match source.fetch_peers() {
            Ok(peers) => peers,
            Err(error) => {
                warn!(%error, kept = self.records.len(), "Telemetry fetch failed, keeping roster");
                return RefreshReport {
                    peers: self.records.len(),
                    defaulted_fields: 0,
                    source_failed: true,
                };
            }
        };

        let batch = materialize_batch(&peers);
        let report = RefreshReport {
            peers: batch.records.len(),
            defaulted_fields: batch.defaulted_fields,
            source_failed: false,
        };

        self.replace_all(batch.records);

        debug!(
            peers = report.peers,
            defaulted_fields = report.defaulted_fields,
            connected = self.counts().connected,
            "Roster refreshed"
        );

        report
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.view.status
    }

    pub fn search_query(&self) -> &SearchQuery {
        &self.view.query
    }

    pub fn view(&self) -> &RosterView {
        &self.view
    }

    pub fn labels(&self) -> &DetailLabels {
        &self.labels
    }

    /// Full unfiltered roster, in engine order.
    pub fn records(&self) -> &[PeerRecord] {
        &self.records
    }

    /// No peers at all, regardless of filter and search.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `position` in the visible list.
    pub fn visible_record(&self, position: usize) -> Option<&PeerRecord> {
        self.visible_records().into_iter().nth(position)
    }

    /// Detail view for the record at `position` in the visible list.
    pub fn detail(&self, position: usize) -> Option<PeerDetailView> {
        self.visible_record(position)
            .map(|record| PeerDetailView::build(record, &self.labels))
    }
}

impl PeerRosterApi for PeerRosterService {
    fn replace_all(&mut self, records: Vec<PeerRecord>) {
        self.records = records;
    }

    fn set_status_filter(&mut self, filter: StatusFilter) {
        self.view.status = filter;
    }

    fn set_search_query(&mut self, text: &str) {
        self.view.query = SearchQuery::new(text);
    }

    fn visible_records(&self) -> Vec<&PeerRecord> {
        view::visible(&self.records, &self.view)
    }

    fn counts(&self) -> RosterCounts {
        view::counts(&self.records)
    }
}
