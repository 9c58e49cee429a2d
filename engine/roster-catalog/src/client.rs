//! HTTP client for the upstream roster feed

use crate::feed::RosterFeedRecord;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// Roster feed client - fetches player batches from the configured provider
pub struct RosterFeedClient {
    client: Client,
    base_url: String,
}

impl RosterFeedClient {
    /// Create a client for the given feed base URL
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url: base_url.into() })
    }

    /// Fetch the full roster batch.
    ///
    /// Fire-and-forget from the engine's perspective: on failure the caller
    /// keeps its current catalog snapshot and may retry.
    pub async fn fetch_roster(&self) -> Result<Vec<RosterFeedRecord>> {
        let url = format!("{}/players", self.base_url);
        info!("Fetching roster feed from: {}", url);

        let response =
            self.client.get(&url).send().await.context("Failed to fetch roster feed")?;

        if !response.status().is_success() {
            anyhow::bail!("Roster feed request failed with status: {}", response.status());
        }

        let records: Vec<RosterFeedRecord> =
            response.json().await.context("Failed to parse roster feed JSON")?;

        info!("Fetched {} roster records", records.len());
        Ok(records)
    }
}
