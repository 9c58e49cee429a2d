use crate::error::{CatalogError, FeedError};
use crate::feed::RosterFeedRecord;
use crate::pricing;
use crate::types::{Player, PlayerId, Position};
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::info;

/// Outcome of one roster sync
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub inserted: usize,
    pub updated: usize,
}

/// Roster Catalog - the engine's view of the player universe
///
/// Players are keyed both by the engine-internal id and by the upstream
/// external id. Syncing the same feed batch twice is a no-op apart from
/// refreshed timestamps: records are upserted by external id, never
/// duplicated.
pub struct RosterCatalog {
    /// Map from internal id to player
    players_by_id: HashMap<PlayerId, Player>,

    /// Map from external id to internal id (sync key)
    id_by_external: HashMap<String, PlayerId>,

    /// Next internal id to assign
    next_id: PlayerId,
}

impl RosterCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self { players_by_id: HashMap::new(), id_by_external: HashMap::new(), next_id: 1 }
    }

    /// Apply one feed batch to the catalog.
    ///
    /// The whole batch is validated before anything is written, so a
    /// malformed record leaves the previous snapshot untouched and the call
    /// is safe to retry.
    pub fn sync(&mut self, records: &[RosterFeedRecord]) -> Result<SyncReport, FeedError> {
        // Validate everything up front
        let mut parsed: Vec<(&RosterFeedRecord, Position)> = Vec::with_capacity(records.len());
        let mut seen = HashMap::new();
        for record in records {
            let position = record.parse_position()?;
            if seen.insert(record.external_id.as_str(), ()).is_some() {
                return Err(FeedError::DuplicateExternalId {
                    external_id: record.external_id.clone(),
                });
            }
            parsed.push((record, position));
        }

        let now = Utc::now();
        let mut report = SyncReport::default();

        for (record, position) in parsed {
            let price =
                pricing::price_for(position, record.depth_chart_order, record.years_experience);

            match self.id_by_external.get(&record.external_id).copied() {
                Some(id) => {
                    // Both maps are maintained together, so the row is present
                    if let Some(player) = self.players_by_id.get_mut(&id) {
                        player.name = record.name.clone();
                        player.team = record.team.clone();
                        player.position = position;
                        player.price = price;
                        player.is_active = record.is_active;
                        player.updated_at = now;
                        report.updated += 1;
                    }
                }
                None => {
                    let id = self.next_id;
                    self.next_id += 1;
                    self.players_by_id.insert(
                        id,
                        Player {
                            id,
                            external_id: record.external_id.clone(),
                            name: record.name.clone(),
                            team: record.team.clone(),
                            position,
                            price,
                            is_active: record.is_active,
                            updated_at: now,
                        },
                    );
                    self.id_by_external.insert(record.external_id.clone(), id);
                    report.inserted += 1;
                }
            }
        }

        info!("Roster sync applied: {} inserted, {} updated", report.inserted, report.updated);
        Ok(report)
    }

    /// Get a player by internal id
    pub fn get(&self, player_id: PlayerId) -> Result<&Player, CatalogError> {
        self.players_by_id.get(&player_id).ok_or(CatalogError::PlayerNotFound { player_id })
    }

    /// Get a player by upstream external id
    pub fn get_by_external(&self, external_id: &str) -> Result<&Player, CatalogError> {
        let id = self
            .id_by_external
            .get(external_id)
            .ok_or_else(|| CatalogError::UnknownExternalId { external_id: external_id.to_string() })?;
        self.get(*id)
    }

    /// Current price of a player
    pub fn price_of(&self, player_id: PlayerId) -> Result<Decimal, CatalogError> {
        Ok(self.get(player_id)?.price)
    }

    /// All players at a position
    pub fn players_at(&self, position: Position) -> Vec<&Player> {
        self.players_by_id.values().filter(|p| p.position == position).collect()
    }

    /// Number of players in the catalog
    pub fn len(&self) -> usize {
        self.players_by_id.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.players_by_id.is_empty()
    }
}

impl Default for RosterCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_record(external_id: &str, name: &str, position: &str) -> RosterFeedRecord {
        RosterFeedRecord {
            external_id: external_id.to_string(),
            name: name.to_string(),
            team: "BAL".to_string(),
            position: position.to_string(),
            is_active: true,
            depth_chart_order: Some(1),
            years_experience: 7,
        }
    }

    #[test]
    fn test_sync_inserts_then_updates() {
        let mut catalog = RosterCatalog::new();
        let batch =
            vec![feed_record("100", "Lamar Jackson", "QB"), feed_record("200", "Ravens", "DEF")];

        let first = catalog.sync(&batch).unwrap();
        assert_eq!(first, SyncReport { inserted: 2, updated: 0 });

        // Re-running the same batch must not duplicate anyone
        let second = catalog.sync(&batch).unwrap();
        assert_eq!(second, SyncReport { inserted: 0, updated: 2 });
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_sync_maps_def_to_dst() {
        let mut catalog = RosterCatalog::new();
        catalog.sync(&[feed_record("200", "Ravens", "DEF")]).unwrap();

        let player = catalog.get_by_external("200").unwrap();
        assert_eq!(player.position, Position::DST);
    }

    #[test]
    fn test_malformed_batch_leaves_catalog_untouched() {
        let mut catalog = RosterCatalog::new();
        catalog.sync(&[feed_record("100", "Lamar Jackson", "QB")]).unwrap();

        let bad_batch =
            vec![feed_record("300", "Josh Allen", "QB"), feed_record("400", "Nobody", "LB")];
        assert!(catalog.sync(&bad_batch).is_err());

        // The valid record in the failed batch must not have been applied
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get_by_external("300").is_err());
    }

    #[test]
    fn test_duplicate_external_id_rejected() {
        let mut catalog = RosterCatalog::new();
        let batch =
            vec![feed_record("100", "Lamar Jackson", "QB"), feed_record("100", "Clone", "QB")];
        assert!(matches!(
            catalog.sync(&batch),
            Err(FeedError::DuplicateExternalId { .. })
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_unknown_player_lookup() {
        let catalog = RosterCatalog::new();
        assert!(matches!(catalog.get(99), Err(CatalogError::PlayerNotFound { player_id: 99 })));
    }
}
