//! # Integration Test Flows
//!
//! Drives the roster the way a UI host does: an engine dump comes in through
//! a `TelemetrySource`, the user filters and searches, then opens one peer.
//!
//! ## Flows Tested:
//!
//! 1. **Dump → Roster**: JSON dump materialized, counts and order preserved
//! 2. **Filter ∧ Search**: independent axes narrowing the visible list
//! 3. **Detail**: section visibility for the inspected peer
//! 4. **Degradation**: a flaky engine never aborts a batch

#[cfg(test)]
mod tests {
    use peer_roster::{
        ConnectionState, DetailSection, FieldError, JsonTelemetrySource, PeerRosterApi,
        PeerRosterService, PeerTelemetry, RosterConfig, RosterCounts, SourceError,
        StatusFilter, TelemetrySource,
    };
    use roster_telemetry::{build_filter, TelemetryConfig};
    use serde_json::json;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn three_peer_dump() -> String {
        json!({ "peers": [
            {
                "connStatus": "Connected",
                "ip": "100.92.10.1",
                "fqdn": "office-gw.netbird.cloud",
                "pubKey": "OfficeKey=",
                "bytesRx": 3_145_728,
                "bytesTx": 1536,
                "latency": 42,
                "relayed": false,
                "direct": true,
                "lastWireguardHandshake": "8 seconds ago",
                "rosenpassEnabled": true
            },
            {
                "connStatus": "Idle",
                "ip": "100.92.10.2",
                "fqdn": "phone.netbird.cloud",
                "pubKey": "PhoneKey="
            },
            {
                "connStatus": "connected",
                "ip": "100.92.10.3",
                "fqdn": "homelab.netbird.cloud",
                "pubKey": "",
                "latency": 0,
                "relayed": true,
                "direct": true,
                "localIceCandidateType": "relay"
            }
        ]})
        .to_string()
    }

    fn roster_from(document: String) -> PeerRosterService {
        let mut roster = PeerRosterService::new();
        let report = roster.refresh_from(&JsonTelemetrySource::new(document));
        assert!(!report.source_failed);
        roster
    }

    fn visible_fqdns(roster: &PeerRosterService) -> Vec<String> {
        roster
            .visible_records()
            .iter()
            .map(|record| record.fqdn().to_string())
            .collect()
    }

    /// Engine binding whose accessors throw for a chosen set of fields.
    struct FlakyPeer {
        status: &'static str,
        fqdn: &'static str,
        broken: &'static [&'static str],
    }

    impl FlakyPeer {
        fn string(&self, field: &str, value: &str) -> Result<String, FieldError> {
            if self.broken.contains(&field) {
                Err(FieldError::Unavailable(format!("{field}: binding error")))
            } else {
                Ok(value.to_string())
            }
        }

        fn number(&self, field: &str, value: i64) -> Result<i64, FieldError> {
            if self.broken.contains(&field) {
                Err(FieldError::Unavailable(format!("{field}: binding error")))
            } else {
                Ok(value)
            }
        }

        fn flag(&self, field: &str, value: bool) -> Result<bool, FieldError> {
            if self.broken.contains(&field) {
                Err(FieldError::Unavailable(format!("{field}: binding error")))
            } else {
                Ok(value)
            }
        }
    }

    impl PeerTelemetry for FlakyPeer {
        fn conn_status(&self) -> Result<String, FieldError> {
            self.string("connStatus", self.status)
        }
        fn ip(&self) -> Result<String, FieldError> {
            self.string("ip", "100.92.20.1")
        }
        fn fqdn(&self) -> Result<String, FieldError> {
            self.string("fqdn", self.fqdn)
        }
        fn pub_key(&self) -> Result<String, FieldError> {
            self.string("pubKey", "FlakyKey=")
        }
        fn local_ice_candidate_type(&self) -> Result<String, FieldError> {
            self.string("localIceCandidateType", "host")
        }
        fn remote_ice_candidate_type(&self) -> Result<String, FieldError> {
            self.string("remoteIceCandidateType", "prflx")
        }
        fn local_ice_candidate_endpoint(&self) -> Result<String, FieldError> {
            self.string("localIceCandidateEndpoint", "192.168.1.20:51820")
        }
        fn remote_ice_candidate_endpoint(&self) -> Result<String, FieldError> {
            self.string("remoteIceCandidateEndpoint", "203.0.113.50:51820")
        }
        fn bytes_rx(&self) -> Result<i64, FieldError> {
            self.number("bytesRx", 4096)
        }
        fn bytes_tx(&self) -> Result<i64, FieldError> {
            self.number("bytesTx", 4096)
        }
        fn latency(&self) -> Result<i64, FieldError> {
            self.number("latency", 9)
        }
        fn relayed(&self) -> Result<bool, FieldError> {
            self.flag("relayed", false)
        }
        fn direct(&self) -> Result<bool, FieldError> {
            self.flag("direct", true)
        }
        fn conn_status_update(&self) -> Result<String, FieldError> {
            self.string("connStatusUpdate", "2024-05-02 08:00:00")
        }
        fn last_wireguard_handshake(&self) -> Result<String, FieldError> {
            self.string("lastWireguardHandshake", "1 second ago")
        }
        fn rosenpass_enabled(&self) -> Result<bool, FieldError> {
            self.flag("rosenpassEnabled", false)
        }
    }

    fn flaky(
        status: &'static str,
        fqdn: &'static str,
        broken: &'static [&'static str],
    ) -> FlakyPeer {
        FlakyPeer {
            status,
            fqdn,
            broken,
        }
    }

    struct FlakyEngine {
        peers: Vec<FlakyPeer>,
    }

    impl TelemetrySource for FlakyEngine {
        type Peer = FlakyPeer;

        fn fetch_peers(&self) -> Result<Vec<FlakyPeer>, SourceError> {
            Ok(self
                .peers
                .iter()
                .map(|peer| flaky(peer.status, peer.fqdn, peer.broken))
                .collect())
        }
    }

    // =============================================================================
    // DUMP → ROSTER → VIEW
    // =============================================================================

    /// Three peers [Connected, Idle, Connected]: counts, filter, then search.
    #[test]
    fn test_end_to_end_filter_then_search() {
        let mut roster = roster_from(three_peer_dump());

        assert_eq!(
            roster.counts(),
            RosterCounts {
                connected: 2,
                total: 3
            }
        );

        roster.set_status_filter(StatusFilter::Connected);
        assert_eq!(
            visible_fqdns(&roster),
            vec!["office-gw.netbird.cloud", "homelab.netbird.cloud"]
        );

        roster.set_search_query("homelab");
        assert_eq!(visible_fqdns(&roster), vec!["homelab.netbird.cloud"]);

        // Summary stays on the full roster
        assert_eq!(roster.counts().total, 3);
    }

    #[test]
    fn test_search_by_ip_and_key_across_statuses() {
        let mut roster = roster_from(three_peer_dump());

        roster.set_search_query(" 100.92.10.2 ");
        assert_eq!(visible_fqdns(&roster), vec!["phone.netbird.cloud"]);

        roster.set_search_query("officekey");
        assert_eq!(visible_fqdns(&roster), vec!["office-gw.netbird.cloud"]);

        roster.set_status_filter(StatusFilter::Idle);
        assert!(roster.visible_records().is_empty());

        roster.set_search_query("");
        assert_eq!(visible_fqdns(&roster), vec!["phone.netbird.cloud"]);
    }

    #[test]
    fn test_refresh_keeps_view_and_replaces_records() {
        let mut roster = roster_from(three_peer_dump());
        roster.set_status_filter(StatusFilter::Connected);
        roster.set_search_query("netbird");

        let next = json!([
            { "connStatus": "Connecting", "ip": "100.92.10.9", "fqdn": "new.netbird.cloud" },
            { "connStatus": "Connected", "ip": "100.92.10.1", "fqdn": "office-gw.netbird.cloud" }
        ])
        .to_string();
        roster.refresh_from(&JsonTelemetrySource::new(next));

        assert_eq!(roster.status_filter(), StatusFilter::Connected);
        assert_eq!(visible_fqdns(&roster), vec!["office-gw.netbird.cloud"]);
        assert_eq!(
            roster.counts(),
            RosterCounts {
                connected: 1,
                total: 2
            }
        );
    }

    #[test]
    fn test_empty_dump_resets_roster() {
        let mut roster = roster_from(three_peer_dump());
        roster.refresh_from(&JsonTelemetrySource::new("[]"));

        assert!(roster.is_empty());
        assert!(roster.visible_records().is_empty());
        assert_eq!(roster.counts(), RosterCounts::default());
    }

    #[test]
    fn test_undecodable_dump_keeps_previous_roster() {
        let mut roster = roster_from(three_peer_dump());
        let report = roster.refresh_from(&JsonTelemetrySource::new("{ truncated"));

        assert!(report.source_failed);
        assert_eq!(roster.counts().total, 3);
    }

    // =============================================================================
    // DETAIL VIEW
    // =============================================================================

    #[test]
    fn test_detail_of_connected_peer() {
        let mut roster = roster_from(three_peer_dump());
        roster.set_status_filter(StatusFilter::Connected);

        let detail = roster.detail(0).expect("office gateway is visible");
        assert_eq!(detail.latency.as_deref(), Some("42 ms"));

        let transfer = detail.data_transfer.expect("counters moved");
        assert_eq!(transfer.received, "3.00 MB");
        assert_eq!(transfer.sent, "1.5 KB");

        assert_eq!(detail.connection_type, "Direct (P2P)");
        assert_eq!(detail.handshake.as_deref(), Some("8 seconds ago"));
        assert_eq!(detail.quantum_resistance.as_deref(), Some("Enabled"));
        assert!(detail.ice_candidates.is_none());
    }

    #[test]
    fn test_detail_hides_unmeasured_latency() {
        let mut roster = roster_from(three_peer_dump());
        roster.set_search_query("homelab");

        let detail = roster.detail(0).expect("homelab is visible");
        assert!(!detail.shows(DetailSection::Latency));
        assert!(!detail.shows(DetailSection::DataTransfer));
        assert_eq!(detail.public_key, "Not available");
        assert_eq!(detail.connection_type, "Relayed");

        let ice = detail.ice_candidates.expect("local candidate type present");
        assert_eq!(ice.local_type, "relay");
        assert_eq!(ice.local_endpoint, "Not available");
        assert_eq!(ice.remote_type, "Not available");
    }

    #[test]
    fn test_detail_of_disconnected_peer_shows_status_update() {
        let dump = json!([{
            "connStatus": "Disconnected",
            "ip": "100.92.10.7",
            "fqdn": "printer.netbird.cloud",
            "bytesRx": 9000,
            "bytesTx": 9000,
            "lastWireguardHandshake": "3 hours ago",
            "connStatusUpdate": "2024-05-01 23:59:59"
        }])
        .to_string();
        let roster = roster_from(dump);

        let record = roster.visible_record(0).expect("one peer");
        assert_eq!(record.status(), ConnectionState::Disconnected);

        let detail = roster.detail(0).expect("one peer");
        assert_eq!(detail.visible_sections(), vec![DetailSection::StatusUpdate]);
        assert_eq!(detail.status_update.as_deref(), Some("2024-05-01 23:59:59"));
    }

    #[test]
    fn test_config_labels_reach_detail() {
        let config = RosterConfig::parse(
            r#"
            initial_filter = "connected"

            [labels]
            not_available = "n/a"
            rosenpass_disabled = "Off"
            "#,
        )
        .expect("valid config");

        let mut roster = PeerRosterService::with_config(config);
        roster.refresh_from(&JsonTelemetrySource::new(three_peer_dump()));

        // Initial filter applied: only connected peers visible
        assert_eq!(roster.visible_records().len(), 2);

        let homelab = roster.detail(1).expect("homelab is second connected peer");
        assert_eq!(homelab.public_key, "n/a");
        assert_eq!(homelab.quantum_resistance.as_deref(), Some("Off"));
    }

    // =============================================================================
    // DEGRADATION
    // =============================================================================

    #[test]
    fn test_flaky_engine_degrades_per_field() {
        let engine = FlakyEngine {
            peers: vec![
                flaky("Connected", "ok.netbird.cloud", &[]),
                flaky("Connected", "flaky.netbird.cloud", &["bytesRx", "bytesTx", "pubKey"]),
                flaky("Idle", "nameless.netbird.cloud", &["fqdn", "connStatus"]),
            ],
        };

        let mut roster = PeerRosterService::new();
        let report = roster.refresh_from(&engine);

        assert_eq!(report.peers, 3);
        assert_eq!(report.defaulted_fields, 5);

        let records = roster.records();
        assert_eq!(records[1].bytes_received(), 0);
        assert_eq!(records[1].public_key(), "");
        assert_eq!(records[1].latency_millis(), 9);
        assert_eq!(records[2].fqdn(), "");
        assert_eq!(records[2].status(), ConnectionState::Unknown);

        // Flaky peer lost both counters, so the transfer section hides
        roster.set_search_query("flaky.netbird");
        let detail = roster.detail(0).expect("flaky peer visible");
        assert!(!detail.shows(DetailSection::DataTransfer));
        assert!(detail.shows(DetailSection::Latency));
    }

    // =============================================================================
    // TELEMETRY SETUP
    // =============================================================================

    #[test]
    fn test_default_telemetry_filter_is_valid() {
        let config = TelemetryConfig::from_lookup(|_| None);
        assert!(build_filter(&config).is_ok());
    }
}
