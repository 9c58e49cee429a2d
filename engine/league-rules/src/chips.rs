//! Chip state machine
//!
//! Chips are one-time strategic modifiers: at most one active per
//! (entry, gameweek), each type limited to a per-season allowance. The
//! wildcard waives the squad deadline and transfer cost, bench-boost counts
//! bench points, triple-captain raises the captain multiplier to 3x.

use crate::config::RulesConfig;
use crate::error::ChipError;
use crate::types::{Gameweek, GameweekId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The chip types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chip {
    Wildcard,
    BenchBoost,
    TripleCaptain,
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Chip::Wildcard => "wildcard",
            Chip::BenchBoost => "bench_boost",
            Chip::TripleCaptain => "triple_captain",
        };
        write!(f, "{name}")
    }
}

/// Per-entry chip ledger: season usage counts plus the active chip per
/// gameweek
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChipLedger {
    uses: HashMap<Chip, u8>,
    active: HashMap<GameweekId, Chip>,
}

impl ChipLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a chip for a gameweek.
    ///
    /// Requires an unused season allowance for the chip type, no other chip
    /// active for the gameweek, and the gameweek not yet finished.
    pub fn activate(
        &mut self,
        chip: Chip,
        gameweek: &Gameweek,
        config: &RulesConfig,
    ) -> Result<(), ChipError> {
        if gameweek.finished {
            return Err(ChipError::GameweekFinished { gameweek: gameweek.id });
        }
        if let Some(&active) = self.active.get(&gameweek.id) {
            return Err(ChipError::ChipAlreadyActive { gameweek: gameweek.id, active });
        }
        if self.uses_of(chip) >= config.chip_uses_per_season {
            return Err(ChipError::AlreadyUsed { chip });
        }

        self.active.insert(gameweek.id, chip);
        *self.uses.entry(chip).or_insert(0) += 1;
        Ok(())
    }

    /// Revoke the active chip for a gameweek, refunding the season use.
    ///
    /// Allowed only before the gameweek deadline.
    pub fn revoke(&mut self, gameweek: &Gameweek, now: DateTime<Utc>) -> Result<Chip, ChipError> {
        if gameweek.deadline_passed(now) {
            return Err(ChipError::RevokeAfterDeadline { gameweek: gameweek.id });
        }

        let chip = self
            .active
            .remove(&gameweek.id)
            .ok_or(ChipError::NoActiveChip { gameweek: gameweek.id })?;

        if let Some(count) = self.uses.get_mut(&chip) {
            *count = count.saturating_sub(1);
        }
        Ok(chip)
    }

    /// The chip active for a gameweek, if any
    pub fn active_chip(&self, gameweek: GameweekId) -> Option<Chip> {
        self.active.get(&gameweek).copied()
    }

    /// Season uses of a chip type
    pub fn uses_of(&self, chip: Chip) -> u8 {
        self.uses.get(&chip).copied().unwrap_or(0)
    }
}
