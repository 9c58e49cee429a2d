//! League entries and their per-season state

use chrono::{DateTime, Utc};
use league_rules::{ChipLedger, EntryId, RulesConfig, TransferState};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One manager's entry in the league
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueEntry {
    pub id: EntryId,

    /// Manager display name
    pub manager: String,

    /// Team name, also the standings tiebreak key
    pub team_name: String,

    /// Season budget available for squad building
    pub budget: Decimal,

    /// Free-transfer bank
    pub transfers: TransferState,

    /// Chip usage and activations
    pub chips: ChipLedger,

    pub joined_at: DateTime<Utc>,
}

impl LeagueEntry {
    pub fn new(id: EntryId, manager: String, team_name: String, config: &RulesConfig) -> Self {
        Self {
            id,
            manager,
            team_name,
            budget: config.initial_budget,
            transfers: TransferState::new(config),
            chips: ChipLedger::new(),
            joined_at: Utc::now(),
        }
    }
}
