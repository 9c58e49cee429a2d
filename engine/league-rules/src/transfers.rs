//! Transfer Ledger
//!
//! Computes the squad delta between consecutive gameweeks and its point
//! cost. Free transfers bank at one per gameweek up to a cap; every change
//! beyond the banked allowance is a "hit" charged at scoring time. A
//! wildcard makes the whole delta free without touching the banked balance.

use crate::config::RulesConfig;
use crate::squad::Squad;
use serde::{Deserialize, Serialize};

/// Per-entry transfer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferState {
    /// Free transfers currently banked
    pub banked_free: u8,
}

impl TransferState {
    /// State for a new entry: the first allotment is banked immediately
    pub fn new(config: &RulesConfig) -> Self {
        Self { banked_free: config.free_transfers_per_gameweek }
    }
}

/// The ledger's verdict on one squad submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferAssessment {
    /// Players changed (players removed = players added = k)
    pub changes: usize,

    /// Free transfers consumed
    pub free_used: u8,

    /// Transfers charged beyond the free allotment
    pub paid: usize,

    /// Point deduction applied at scoring time
    pub hit_points: i64,
}

impl TransferAssessment {
    /// A free submission (initial draft, or no changes)
    pub fn free() -> Self {
        Self { changes: 0, free_used: 0, paid: 0, hit_points: 0 }
    }
}

/// Assess the cost of replacing `previous` with `candidate`.
///
/// The first gameweek an entry enters has no prior squad, so the draft is
/// free. The banked balance is not mutated here - consumption is settled
/// when the gameweek closes, so resubmissions within a gameweek recompute
/// the assessment instead of double-consuming.
pub fn assess(
    previous: Option<&Squad>,
    candidate: &Squad,
    state: &TransferState,
    wildcard_active: bool,
    config: &RulesConfig,
) -> TransferAssessment {
    let changes = match previous {
        Some(prev) => candidate.players_not_in(prev),
        None => return TransferAssessment::free(),
    };

    if wildcard_active {
        return TransferAssessment { changes, free_used: 0, paid: 0, hit_points: 0 };
    }

    let free_used = changes.min(state.banked_free as usize) as u8;
    let paid = changes - free_used as usize;
    let hit_points = paid as i64 * config.hit_cost as i64;

    TransferAssessment { changes, free_used, paid, hit_points }
}

/// Roll the banked balance into the next gameweek: unspent transfers carry
/// over, one new allotment lands, and the cap binds.
pub fn bank_for_next(
    state: &TransferState,
    free_used: u8,
    config: &RulesConfig,
) -> TransferState {
    let remaining = state.banked_free.saturating_sub(free_used);
    let banked_free =
        (remaining + config.free_transfers_per_gameweek).min(config.free_transfer_cap);
    TransferState { banked_free }
}
