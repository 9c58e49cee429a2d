//! Stat feed record shape and HTTP client
//!
//! The stats supplier sends one record per (gameweek, player), keyed by the
//! roster feed's external id. Records are resolved against the catalog
//! before they become engine stat lines.

use crate::error::StatFeedError;
use crate::stat_line::StatLine;
use anyhow::{Context, Result};
use league_rules::GameweekId;
use reqwest::Client;
use roster_catalog::RosterCatalog;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// One raw stat record from the upstream supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatFeedRecord {
    /// Upstream player id
    pub external_id: String,

    #[serde(default)]
    pub pass_yd: u32,
    #[serde(default)]
    pub pass_td: u32,
    #[serde(default)]
    pub int_thrown: u32,
    #[serde(default)]
    pub rush_yd: u32,
    #[serde(default)]
    pub rush_td: u32,
    #[serde(default)]
    pub rec: u32,
    #[serde(default)]
    pub rec_yd: u32,
    #[serde(default)]
    pub rec_td: u32,
    #[serde(default)]
    pub fumbles_lost: u32,
    #[serde(default)]
    pub fg_made: u32,
    #[serde(default)]
    pub fg_missed: u32,
    #[serde(default)]
    pub xp_made: u32,
    #[serde(default)]
    pub xp_missed: u32,
    #[serde(default)]
    pub dst_sacks: u32,
    #[serde(default)]
    pub dst_int: u32,
    #[serde(default)]
    pub dst_fumble_rec: u32,
    #[serde(default)]
    pub dst_td: u32,
    #[serde(default)]
    pub points_allowed: u32,
}

impl StatFeedRecord {
    /// Resolve the record against the catalog into an engine stat line
    pub fn to_stat_line(
        &self,
        gameweek: GameweekId,
        catalog: &RosterCatalog,
    ) -> Result<StatLine, StatFeedError> {
        let player = catalog.get_by_external(&self.external_id).map_err(|_| {
            StatFeedError::UnknownPlayer { external_id: self.external_id.clone() }
        })?;

        let mut line = StatLine::new(gameweek, player.id);
        line.pass_yd = self.pass_yd;
        line.pass_td = self.pass_td;
        line.int_thrown = self.int_thrown;
        line.rush_yd = self.rush_yd;
        line.rush_td = self.rush_td;
        line.rec = self.rec;
        line.rec_yd = self.rec_yd;
        line.rec_td = self.rec_td;
        line.fumbles_lost = self.fumbles_lost;
        line.fg_made = self.fg_made;
        line.fg_missed = self.fg_missed;
        line.xp_made = self.xp_made;
        line.xp_missed = self.xp_missed;
        line.dst_sacks = self.dst_sacks;
        line.dst_int = self.dst_int;
        line.dst_fumble_rec = self.dst_fumble_rec;
        line.dst_td = self.dst_td;
        line.points_allowed = self.points_allowed;
        Ok(line)
    }
}

/// Stat feed client - fetches per-gameweek stat batches
pub struct StatFeedClient {
    client: Client,
    base_url: String,
}

impl StatFeedClient {
    /// Create a client for the given feed base URL
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url: base_url.into() })
    }

    /// Fetch all stat records for one gameweek
    pub async fn fetch_week(&self, gameweek: GameweekId) -> Result<Vec<StatFeedRecord>> {
        let url = format!("{}/stats/{}", self.base_url, gameweek);
        info!("Fetching stat lines for gameweek {} from: {}", gameweek, url);

        let response = self.client.get(&url).send().await.context("Failed to fetch stat feed")?;

        if !response.status().is_success() {
            anyhow::bail!("Stat feed request failed with status: {}", response.status());
        }

        let records: Vec<StatFeedRecord> =
            response.json().await.context("Failed to parse stat feed JSON")?;

        info!("Fetched {} stat records for gameweek {}", records.len(), gameweek);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_catalog::RosterFeedRecord;

    fn catalog() -> RosterCatalog {
        let mut catalog = RosterCatalog::new();
        catalog
            .sync(&[RosterFeedRecord {
                external_id: "100".to_string(),
                name: "Lamar Jackson".to_string(),
                team: "BAL".to_string(),
                position: "QB".to_string(),
                is_active: true,
                depth_chart_order: Some(1),
                years_experience: 7,
            }])
            .unwrap();
        catalog
    }

    #[test]
    fn test_record_resolves_to_stat_line() {
        let catalog = catalog();
        let record: StatFeedRecord =
            serde_json::from_str(r#"{"external_id": "100", "pass_yd": 310, "pass_td": 2}"#)
                .unwrap();

        let line = record.to_stat_line(4, &catalog).unwrap();
        assert_eq!(line.gameweek, 4);
        assert_eq!(line.pass_yd, 310);
        assert_eq!(line.pass_td, 2);
        // Omitted counters default to zero
        assert_eq!(line.int_thrown, 0);
    }

    #[test]
    fn test_unknown_player_rejected() {
        let catalog = catalog();
        let record: StatFeedRecord =
            serde_json::from_str(r#"{"external_id": "999"}"#).unwrap();

        assert!(matches!(
            record.to_stat_line(4, &catalog),
            Err(StatFeedError::UnknownPlayer { .. })
        ));
    }
}
