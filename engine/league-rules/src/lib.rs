//! League rules engine
//!
//! The rules core of the fantasy game: squad composition and budget checks,
//! the transfer ledger, lineup/formation validation, and the chip state
//! machine. Everything here is synchronous and pure - callers supply the
//! catalog snapshot, the gameweek, and the clock.

pub mod chips;
pub mod config;
pub mod error;
pub mod lineup;
pub mod squad;
pub mod transfers;
pub mod types;

#[cfg(test)]
mod test_support;

pub use chips::{Chip, ChipLedger};
pub use config::{Formation, RulesConfig, SquadLimits};
pub use error::{ChipError, LineupViolation, SquadRejection, SquadViolation};
pub use lineup::{Lineup, LineupCandidate, LineupValidator};
pub use squad::{Squad, SquadValidator};
pub use transfers::{TransferAssessment, TransferState};
pub use types::{EntryId, Gameweek, GameweekId};
