//! In-memory squad, lineup, and stat stores
//!
//! One squad row and at most one lineup row per (entry, gameweek), enforced
//! by the map key. Replacement happens under a single write-lock section, so
//! a reader observes either the fully old or fully new row. Writers carry
//! the revision they read; a stale writer loses with a conflict and must
//! resubmit against fresh state.

use crate::error::{Result, ServiceError};
use league_rules::{EntryId, GameweekId, Lineup, Squad, TransferAssessment};
use parking_lot::RwLock;
use roster_catalog::PlayerId;
use scoring_engine::StatLine;
use std::collections::HashMap;

/// A stored squad with its transfer assessment
#[derive(Debug, Clone)]
pub struct SquadRecord {
    pub squad: Squad,
    pub assessment: TransferAssessment,
    pub revision: u64,
}

#[derive(Debug, Default)]
pub struct SquadStore {
    rows: RwLock<HashMap<(EntryId, GameweekId), SquadRecord>>,
}

impl SquadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, entry_id: EntryId, gameweek: GameweekId) -> Option<SquadRecord> {
        self.rows.read().get(&(entry_id, gameweek)).cloned()
    }

    /// Atomically replace the squad for (entry, gameweek).
    ///
    /// `expected_revision` is the revision the submission was built against
    /// (`None` for a first insert). On a mismatch the row is left untouched
    /// and the caller gets the conflict.
    pub fn replace(
        &self,
        entry_id: EntryId,
        gameweek: GameweekId,
        squad: Squad,
        assessment: TransferAssessment,
        expected_revision: Option<u64>,
    ) -> Result<u64> {
        let mut rows = self.rows.write();
        let found = rows.get(&(entry_id, gameweek)).map(|row| row.revision);
        if found != expected_revision {
            return Err(ServiceError::RevisionConflict {
                entry_id,
                gameweek,
                expected: expected_revision,
                found,
            });
        }

        let revision = found.unwrap_or(0) + 1;
        rows.insert((entry_id, gameweek), SquadRecord { squad, assessment, revision });
        Ok(revision)
    }
}

/// A stored lineup
#[derive(Debug, Clone)]
pub struct LineupRecord {
    pub lineup: Lineup,
    pub revision: u64,
}

#[derive(Debug, Default)]
pub struct LineupStore {
    rows: RwLock<HashMap<(EntryId, GameweekId), LineupRecord>>,
}

impl LineupStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, entry_id: EntryId, gameweek: GameweekId) -> Option<LineupRecord> {
        self.rows.read().get(&(entry_id, gameweek)).cloned()
    }

    /// Atomically replace the lineup for (entry, gameweek), same revision
    /// protocol as the squad store
    pub fn replace(
        &self,
        entry_id: EntryId,
        gameweek: GameweekId,
        lineup: Lineup,
        expected_revision: Option<u64>,
    ) -> Result<u64> {
        let mut rows = self.rows.write();
        let found = rows.get(&(entry_id, gameweek)).map(|row| row.revision);
        if found != expected_revision {
            return Err(ServiceError::RevisionConflict {
                entry_id,
                gameweek,
                expected: expected_revision,
                found,
            });
        }

        let revision = found.unwrap_or(0) + 1;
        rows.insert((entry_id, gameweek), LineupRecord { lineup, revision });
        Ok(revision)
    }
}

/// Stat lines keyed by (gameweek, player)
#[derive(Debug, Default)]
pub struct StatStore {
    rows: RwLock<HashMap<(GameweekId, PlayerId), StatLine>>,
}

impl StatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a validated batch for one gameweek in a single lock section.
    /// Re-ingesting the same batch overwrites line-for-line.
    pub fn upsert_week(&self, gameweek: GameweekId, lines: Vec<StatLine>) -> usize {
        let mut rows = self.rows.write();
        let count = lines.len();
        for line in lines {
            rows.insert((gameweek, line.player_id), line);
        }
        count
    }

    /// All stat lines for a gameweek, keyed by player
    pub fn week(&self, gameweek: GameweekId) -> HashMap<PlayerId, StatLine> {
        self.rows
            .read()
            .iter()
            .filter(|((gw, _), _)| *gw == gameweek)
            .map(|((_, player_id), line)| (*player_id, line.clone()))
            .collect()
    }
}
