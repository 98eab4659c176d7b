//! roster-inspect: drive the peer roster from an engine telemetry dump.
//!
//! Loads a JSON status dump, applies the requested filter and search, and
//! prints whatever the roster returns. All filtering and formatting happens
//! in `peer-roster`; this binary only lays the results out.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use peer_roster::{
    JsonTelemetrySource, PeerDetailView, PeerRecord, PeerRosterApi, PeerRosterService,
    RosterConfig, StatusFilter,
};
use roster_telemetry::{init_logging, log_peer_event, TelemetryConfig};

/// roster-inspect: peer roster viewer for engine telemetry dumps
#[derive(Parser, Debug)]
#[command(name = "roster-inspect")]
#[command(about = "Filter, search and inspect peers from an engine status dump")]
struct Args {
    /// JSON telemetry dump (array of peers or `{ "peers": [...] }`)
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Optional TOML config with labels and initial view state
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Status filter: all, idle, connecting or connected
    #[arg(short, long)]
    filter: Option<StatusFilter>,

    /// Search text matched against FQDN, IP and public key
    #[arg(short = 'q', long)]
    search: Option<String>,

    /// Show the detail view of the N-th visible peer (0-based)
    #[arg(short, long)]
    detail: Option<usize>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if args.verbose {
        telemetry = telemetry.with_log_level("debug");
    }
    init_logging(&telemetry).context("failed to initialize logging")?;

    let config = match &args.config {
        Some(path) => RosterConfig::load(path).context("failed to load roster config")?,
        None => RosterConfig::default(),
    };

    let source = JsonTelemetrySource::load(&args.snapshot).context("failed to open snapshot")?;

    let mut roster = PeerRosterService::with_config(config);
    let report = roster.refresh_from(&source);
    if report.source_failed {
        anyhow::bail!("snapshot {} could not be decoded", args.snapshot.display());
    }

    if let Some(filter) = args.filter {
        roster.set_status_filter(filter);
    }
    if let Some(search) = &args.search {
        roster.set_search_query(search);
    }

    match args.detail {
        Some(position) => {
            let detail = roster
                .detail(position)
                .with_context(|| format!("no visible peer at position {}", position))?;
            log_peer_event!(debug, "Showing peer detail", detail.fqdn, position = position);
            print_detail(&detail, args.json)?;
        }
        None => print_roster(&roster, args.json)?,
    }

    Ok(())
}

fn print_roster(roster: &PeerRosterService, json: bool) -> Result<()> {
    let counts = roster.counts();
    let visible = roster.visible_records();

    if json {
        let body = serde_json::json!({
            "counts": counts,
            "filter": roster.status_filter(),
            "query": roster.search_query().as_str(),
            "peers": visible,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{} of {} peers connected", counts.connected, counts.total);

    if roster.is_empty() {
        println!("No peers yet.");
        return Ok(());
    }

    for (position, record) in visible.iter().enumerate() {
        print_row(position, record);
    }

    Ok(())
}

fn print_row(position: usize, record: &PeerRecord) {
    println!(
        "[{:>2}] {:<12} {:<32} {}",
        position,
        record.status().label(),
        record.fqdn(),
        record.ip()
    );
}

fn print_detail(detail: &PeerDetailView, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(detail)?);
        return Ok(());
    }

    println!("{}", detail.fqdn);
    println!("  IP:              {}", detail.ip);
    println!("  Public key:      {}", detail.public_key);
    println!("  Status:          {}", detail.status);
    println!("  Connection:      {}", detail.connection_type);

    if let Some(latency) = &detail.latency {
        println!("  Latency:         {}", latency);
    }
    if let Some(transfer) = &detail.data_transfer {
        println!("  Received:        {}", transfer.received);
        println!("  Sent:            {}", transfer.sent);
    }
    if let Some(ice) = &detail.ice_candidates {
        println!("  Local ICE:       {} ({})", ice.local_type, ice.local_endpoint);
        println!("  Remote ICE:      {} ({})", ice.remote_type, ice.remote_endpoint);
    }
    if let Some(handshake) = &detail.handshake {
        println!("  Last handshake:  {}", handshake);
    }
    if let Some(update) = &detail.status_update {
        println!("  Status update:   {}", update);
    }
    if let Some(rosenpass) = &detail.quantum_resistance {
        println!("  Rosenpass:       {}", rosenpass);
    }

    Ok(())
}
