//! Fantasy League Service
//!
//! Entry point for the league engine: loads configuration, initializes
//! logging, optionally runs an initial roster sync, and waits for shutdown.

use anyhow::{Context, Result};
use league_service::{initialize_logging, load_config, LeagueService};
use roster_catalog::RosterFeedClient;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    initialize_logging(&config.logging)?;

    info!("Starting Fantasy League Service v{}", env!("CARGO_PKG_VERSION"));
    info!("League: {}", config.league.name);

    let service = Arc::new(LeagueService::new(config.clone()));

    if config.feeds.sync_on_start {
        let client = RosterFeedClient::new(&config.feeds.roster_url, config.feeds.timeout_secs)?;
        match service.sync_roster_from_feed(&client).await {
            Ok(report) => {
                info!("Initial roster sync: {} inserted, {} updated", report.inserted, report.updated)
            }
            Err(e) => warn!("Initial roster sync failed, catalog left as-is: {}", e),
        }
    }

    info!("League service is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await.context("Failed to listen for shutdown signal")?;

    info!("Shutdown signal received; league service stopping");
    Ok(())
}
