//! Rules policy configuration
//!
//! Every numeric rule of the game lives here so league operators can tune it;
//! the defaults are the standard salary-cap game.

use roster_catalog::Position;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-position squad caps
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SquadLimits {
    pub qb: u8,
    pub rb: u8,
    pub wr: u8,
    pub te: u8,
    pub k: u8,
    pub dst: u8,
}

impl SquadLimits {
    /// Cap for one position
    pub fn cap(&self, position: Position) -> u8 {
        match position {
            Position::QB => self.qb,
            Position::RB => self.rb,
            Position::WR => self.wr,
            Position::TE => self.te,
            Position::K => self.k,
            Position::DST => self.dst,
        }
    }
}

impl Default for SquadLimits {
    fn default() -> Self {
        Self { qb: 2, rb: 5, wr: 5, te: 2, k: 1, dst: 1 }
    }
}

/// Starting formation: fixed slots per position plus FLEX slots fillable by
/// any RB/WR/TE not already consuming a fixed slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Formation {
    pub qb: u8,
    pub rb: u8,
    pub wr: u8,
    pub te: u8,
    pub k: u8,
    pub dst: u8,
    pub flex: u8,
}

impl Formation {
    /// Fixed slots for one position
    pub fn fixed(&self, position: Position) -> u8 {
        match position {
            Position::QB => self.qb,
            Position::RB => self.rb,
            Position::WR => self.wr,
            Position::TE => self.te,
            Position::K => self.k,
            Position::DST => self.dst,
        }
    }

    /// Total starter slots including FLEX
    pub fn total_slots(&self) -> usize {
        [self.qb, self.rb, self.wr, self.te, self.k, self.dst, self.flex]
            .iter()
            .map(|&slots| slots as usize)
            .sum()
    }
}

impl Default for Formation {
    fn default() -> Self {
        Self { qb: 1, rb: 2, wr: 2, te: 1, k: 1, dst: 1, flex: 1 }
    }
}

/// The full rules policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Squad size (players owned per entry)
    pub squad_size: usize,

    /// Starters per gameweek
    pub starter_count: usize,

    /// Budget each entry starts the season with
    pub initial_budget: Decimal,

    /// Per-position squad caps
    pub squad_limits: SquadLimits,

    /// Starting formation
    pub formation: Formation,

    /// Free transfers banked per gameweek
    pub free_transfers_per_gameweek: u8,

    /// Maximum banked free transfers
    pub free_transfer_cap: u8,

    /// Points charged per transfer beyond the free allotment
    pub hit_cost: u32,

    /// Uses allowed per chip type per season
    pub chip_uses_per_season: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            squad_size: 15,
            starter_count: 9,
            initial_budget: Decimal::new(10000, 2), // 100.00
            squad_limits: SquadLimits::default(),
            formation: Formation::default(),
            free_transfers_per_gameweek: 1,
            free_transfer_cap: 2,
            hit_cost: 4,
            chip_uses_per_season: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_consistent() {
        let config = RulesConfig::default();
        // Formation slots must equal the starter count
        assert_eq!(config.formation.total_slots(), config.starter_count);
        // Squad caps must be able to fill the squad
        let cap_total: u8 = Position::ALL.iter().map(|p| config.squad_limits.cap(*p)).sum();
        assert!(cap_total as usize >= config.squad_size);
    }
}
