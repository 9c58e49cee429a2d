//! League service - wires the catalog, rules, scoring, and standings
//!
//! Submissions are short-lived, independent operations serialized per
//! (entry, gameweek) by the stores' revision protocol. The scoring run is a
//! batch over a finished gameweek: entries are processed one at a time, and
//! the standings fold is keyed by gameweek, so re-running after a partial
//! failure is safe.

use crate::config::ServiceConfig;
use crate::entry::LeagueEntry;
use crate::error::{Result, ServiceError};
use crate::schedule::GameweekSchedule;
use crate::store::{LineupStore, SquadStore, StatStore};
use chrono::{DateTime, Utc};
use league_rules::{
    transfers, Chip, EntryId, Gameweek, GameweekId, LineupCandidate, LineupValidator,
    SquadValidator, TransferAssessment,
};
use league_standings::{StandingRow, Standings};
use parking_lot::RwLock;
use roster_catalog::{PlayerId, RosterCatalog, RosterFeedClient, SyncReport};
use rust_decimal::Decimal;
use scoring_engine::{score_lineup, LineupScore, StatFeedClient, StatFeedError, StatFeedRecord};
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

/// Result of an accepted squad submission
#[derive(Debug, Clone)]
pub struct SquadSubmission {
    /// Store revision of the accepted squad
    pub revision: u64,

    /// Total price of the accepted squad
    pub total_cost: Decimal,

    /// Budget left after the squad cost
    pub budget_remaining: Decimal,

    /// The transfer ledger's verdict, applied at scoring time
    pub assessment: TransferAssessment,
}

/// One entry's outcome from a scoring run
#[derive(Debug, Clone)]
pub struct ScoredEntry {
    pub entry_id: EntryId,
    pub score: LineupScore,
}

#[derive(Debug, Default)]
struct EntryRegistry {
    rows: HashMap<EntryId, LeagueEntry>,
    next_id: EntryId,
}

/// The league engine behind the submission and standings surfaces
pub struct LeagueService {
    config: ServiceConfig,
    catalog: RwLock<RosterCatalog>,
    entries: RwLock<EntryRegistry>,
    schedule: GameweekSchedule,
    squads: SquadStore,
    lineups: LineupStore,
    stats: StatStore,
    standings: RwLock<Standings>,
}

impl LeagueService {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            catalog: RwLock::new(RosterCatalog::new()),
            entries: RwLock::new(EntryRegistry { rows: HashMap::new(), next_id: 1 }),
            schedule: GameweekSchedule::new(),
            squads: SquadStore::new(),
            lineups: LineupStore::new(),
            stats: StatStore::new(),
            standings: RwLock::new(Standings::new()),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    // ---- entries ----

    /// Register a manager's entry in the league
    pub fn register_entry(&self, manager: &str, team_name: &str) -> LeagueEntry {
        let mut registry = self.entries.write();
        let id = registry.next_id;
        registry.next_id += 1;

        let entry =
            LeagueEntry::new(id, manager.to_string(), team_name.to_string(), &self.config.rules);
        registry.rows.insert(id, entry.clone());
        info!("Registered entry {} ({}) for manager {}", id, team_name, manager);
        entry
    }

    /// Fetch an entry snapshot
    pub fn entry(&self, entry_id: EntryId) -> Result<LeagueEntry> {
        self.entries
            .read()
            .rows
            .get(&entry_id)
            .cloned()
            .ok_or(ServiceError::EntryNotFound { entry_id })
    }

    // ---- schedule ----

    /// Create the next gameweek
    pub fn create_gameweek(&self, deadline: DateTime<Utc>) -> Gameweek {
        self.schedule.create(deadline)
    }

    /// Fetch a gameweek
    pub fn gameweek(&self, gameweek: GameweekId) -> Result<Gameweek> {
        self.schedule.get(gameweek)
    }

    /// Close a gameweek: stats become immutable, scoring becomes available,
    /// and every entry's free-transfer bank rolls into the next gameweek.
    pub fn finish_gameweek(&self, gameweek: GameweekId) -> Result<Gameweek> {
        let finished = self.schedule.finish(gameweek)?;

        let mut registry = self.entries.write();
        for entry in registry.rows.values_mut() {
            let free_used = self
                .squads
                .get(entry.id, gameweek)
                .map(|record| record.assessment.free_used)
                .unwrap_or(0);
            entry.transfers =
                transfers::bank_for_next(&entry.transfers, free_used, &self.config.rules);
        }

        Ok(finished)
    }

    // ---- feeds ----

    /// Apply a roster feed batch to the catalog (idempotent upsert)
    pub fn sync_roster(&self, records: &[roster_catalog::RosterFeedRecord]) -> Result<SyncReport> {
        Ok(self.catalog.write().sync(records)?)
    }

    /// Fetch the roster feed and sync it. On failure the current catalog
    /// snapshot is kept and the call may be retried.
    pub async fn sync_roster_from_feed(&self, client: &RosterFeedClient) -> Result<SyncReport> {
        let records = client
            .fetch_roster()
            .await
            .map_err(|e| ServiceError::FeedUnavailable { message: e.to_string() })?;
        self.sync_roster(&records)
    }

    /// Ingest a stat batch for a gameweek.
    ///
    /// The batch is resolved and validated in full before anything is
    /// written; a finished gameweek rejects ingestion outright.
    pub fn ingest_stat_lines(
        &self,
        gameweek: GameweekId,
        records: &[StatFeedRecord],
    ) -> Result<usize> {
        let week = self.schedule.get(gameweek)?;
        if week.finished {
            return Err(ServiceError::GameweekFinished { gameweek });
        }

        let catalog = self.catalog.read();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut lines = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.external_id.as_str()) {
                return Err(StatFeedError::DuplicatePlayer {
                    external_id: record.external_id.clone(),
                }
                .into());
            }
            lines.push(record.to_stat_line(gameweek, &catalog)?);
        }
        drop(catalog);

        let count = self.stats.upsert_week(gameweek, lines);
        info!("Ingested {} stat lines for gameweek {}", count, gameweek);
        Ok(count)
    }

    /// Fetch and ingest a gameweek's stat batch from the feed
    pub async fn ingest_stats_from_feed(
        &self,
        client: &StatFeedClient,
        gameweek: GameweekId,
    ) -> Result<usize> {
        let records = client
            .fetch_week(gameweek)
            .await
            .map_err(|e| ServiceError::FeedUnavailable { message: e.to_string() })?;
        self.ingest_stat_lines(gameweek, &records)
    }

    // ---- submissions ----

    /// Submit a candidate squad for (entry, gameweek).
    ///
    /// `expected_revision` is the squad revision the submission was built
    /// against (`None` when drafting fresh); a stale submission loses with a
    /// revision conflict and must be rebuilt from current state. On any
    /// rejection the stored squad is untouched.
    pub fn submit_squad(
        &self,
        entry_id: EntryId,
        gameweek: GameweekId,
        players: &[PlayerId],
        expected_revision: Option<u64>,
        now: DateTime<Utc>,
    ) -> Result<SquadSubmission> {
        let entry = self.entry(entry_id)?;
        let week = self.schedule.get(gameweek)?;
        if week.finished {
            return Err(ServiceError::GameweekFinished { gameweek });
        }

        let wildcard_active = entry.chips.active_chip(gameweek) == Some(Chip::Wildcard);

        let catalog = self.catalog.read();
        let squad = SquadValidator::new(&catalog, &self.config.rules).validate(
            players,
            entry.budget,
            &week,
            now,
            wildcard_active,
        )?;
        drop(catalog);

        // The baseline is the most recent accepted squad from an earlier
        // gameweek; an entry with no prior squad is drafting for free
        let previous = (1..gameweek).rev().find_map(|gw| self.squads.get(entry_id, gw));
        let assessment = transfers::assess(
            previous.as_ref().map(|record| &record.squad),
            &squad,
            &entry.transfers,
            wildcard_active,
            &self.config.rules,
        );

        let total_cost = squad.total_cost;
        let revision =
            self.squads.replace(entry_id, gameweek, squad, assessment, expected_revision)?;

        info!(
            "Accepted squad for entry {} gameweek {} (revision {}, cost {}, {} changes, hit {})",
            entry_id, gameweek, revision, total_cost, assessment.changes, assessment.hit_points
        );

        Ok(SquadSubmission {
            revision,
            total_cost,
            budget_remaining: entry.budget - total_cost,
            assessment,
        })
    }

    /// Submit a lineup for (entry, gameweek). The squad must already be on
    /// file; the gameweek deadline applies.
    pub fn submit_lineup(
        &self,
        entry_id: EntryId,
        gameweek: GameweekId,
        candidate: &LineupCandidate,
        expected_revision: Option<u64>,
        now: DateTime<Utc>,
    ) -> Result<u64> {
        self.entry(entry_id)?;
        let week = self.schedule.get(gameweek)?;
        if week.finished {
            return Err(ServiceError::GameweekFinished { gameweek });
        }
        if week.deadline_passed(now) {
            return Err(ServiceError::DeadlinePassed { gameweek });
        }

        let squad_record = self
            .squads
            .get(entry_id, gameweek)
            .ok_or(ServiceError::SquadNotSet { entry_id, gameweek })?;

        let catalog = self.catalog.read();
        let lineup = LineupValidator::new(&catalog, &self.config.rules)
            .validate(candidate, &squad_record.squad)?;
        drop(catalog);

        let revision = self.lineups.replace(entry_id, gameweek, lineup, expected_revision)?;
        info!("Accepted lineup for entry {} gameweek {} (revision {})", entry_id, gameweek, revision);
        Ok(revision)
    }

    // ---- chips ----

    /// Activate a chip for (entry, gameweek)
    pub fn activate_chip(
        &self,
        entry_id: EntryId,
        gameweek: GameweekId,
        chip: Chip,
    ) -> Result<()> {
        let week = self.schedule.get(gameweek)?;

        let mut registry = self.entries.write();
        let entry = registry
            .rows
            .get_mut(&entry_id)
            .ok_or(ServiceError::EntryNotFound { entry_id })?;
        entry.chips.activate(chip, &week, &self.config.rules)?;
        info!("Entry {} activated {} for gameweek {}", entry_id, chip, gameweek);
        Ok(())
    }

    /// Revoke the active chip for (entry, gameweek), allowed only before
    /// the deadline
    pub fn revoke_chip(
        &self,
        entry_id: EntryId,
        gameweek: GameweekId,
        now: DateTime<Utc>,
    ) -> Result<Chip> {
        let week = self.schedule.get(gameweek)?;

        let mut registry = self.entries.write();
        let entry = registry
            .rows
            .get_mut(&entry_id)
            .ok_or(ServiceError::EntryNotFound { entry_id })?;
        let chip = entry.chips.revoke(&week, now)?;
        info!("Entry {} revoked {} for gameweek {}", entry_id, chip, gameweek);
        Ok(chip)
    }

    // ---- scoring & standings ----

    /// Score a finished gameweek for every entry with a lineup on file.
    ///
    /// Entries are processed one at a time, and results land in the
    /// standings keyed by gameweek, so the run is idempotent and safe to
    /// re-run after a partial failure.
    pub fn run_scoring(&self, gameweek: GameweekId) -> Result<Vec<ScoredEntry>> {
        let week = self.schedule.get(gameweek)?;
        if !week.finished {
            return Err(ServiceError::GameweekNotFinished { gameweek });
        }

        let stats = self.stats.week(gameweek);
        let entries: Vec<LeagueEntry> = {
            let registry = self.entries.read();
            let mut rows: Vec<LeagueEntry> = registry.rows.values().cloned().collect();
            rows.sort_by_key(|entry| entry.id);
            rows
        };

        let catalog = self.catalog.read();
        let mut scored = Vec::new();
        for entry in entries {
            let Some(lineup_record) = self.lineups.get(entry.id, gameweek) else {
                warn!("Entry {} has no lineup for gameweek {}; skipping", entry.id, gameweek);
                continue;
            };
            let hit_points = self
                .squads
                .get(entry.id, gameweek)
                .map(|record| record.assessment.hit_points)
                .unwrap_or(0);
            let chip = entry.chips.active_chip(gameweek);

            let score = score_lineup(
                &lineup_record.lineup,
                &stats,
                &catalog,
                chip,
                hit_points,
                &self.config.weights,
            )?;

            self.standings.write().record(entry.id, gameweek, score.total);
            info!(
                "Scored entry {} gameweek {}: {} (captain {}, hit {})",
                entry.id, gameweek, score.total, score.effective_captain, score.hit
            );
            scored.push(ScoredEntry { entry_id: entry.id, score });
        }

        Ok(scored)
    }

    /// The ranked standings: cumulative points descending, ties by team
    /// name ascending
    pub fn standings(&self) -> Vec<StandingRow> {
        let teams: HashMap<EntryId, String> = self
            .entries
            .read()
            .rows
            .values()
            .map(|entry| (entry.id, entry.team_name.clone()))
            .collect();
        self.standings.read().table(&teams)
    }
}
