//! Error types for the rules engine
//!
//! Squad validation reports every violation it finds; lineup validation
//! names the first failing condition. Neither leaves partial state behind.

use crate::chips::Chip;
use crate::types::GameweekId;
use roster_catalog::{PlayerId, Position};
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// One squad rule violation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquadViolation {
    #[error("Squad must have exactly {expected} players, got {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("Duplicate player in squad: {player_id}")]
    DuplicatePlayer { player_id: PlayerId },

    #[error("Unknown player: {player_id}")]
    UnknownPlayer { player_id: PlayerId },

    #[error("Too many {position} players: cap {cap}, got {actual}")]
    PositionCapExceeded { position: Position, cap: u8, actual: u8 },

    #[error("Squad cost {cost} exceeds budget {budget}")]
    OverBudget { cost: Decimal, budget: Decimal },

    #[error("Deadline for gameweek {gameweek} has passed")]
    DeadlinePassed { gameweek: GameweekId },
}

/// A rejected squad submission, carrying every violation found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquadRejection {
    pub violations: Vec<SquadViolation>,
}

impl fmt::Display for SquadRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Squad rejected: ")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SquadRejection {}

/// The first failing lineup condition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineupViolation {
    #[error("Lineup must have exactly {expected} starters, got {actual}")]
    WrongStarterCount { expected: usize, actual: usize },

    #[error("Duplicate starter: {player_id}")]
    DuplicateStarter { player_id: PlayerId },

    #[error("Starter {player_id} is not in the squad")]
    StarterNotInSquad { player_id: PlayerId },

    #[error("Unknown player: {player_id}")]
    UnknownPlayer { player_id: PlayerId },

    #[error("Formation requires {required} starting {position}, got {actual}")]
    FormationUnsatisfied { position: Position, required: u8, actual: u8 },

    #[error("Formation requires {required} FLEX starter(s), got {actual}")]
    FlexUnsatisfied { required: u8, actual: u8 },

    #[error("Captain {player_id} is not a starter")]
    CaptainNotStarter { player_id: PlayerId },

    #[error("Vice-captain {player_id} is not a starter")]
    ViceCaptainNotStarter { player_id: PlayerId },

    #[error("Captain and vice-captain must be distinct, both are {player_id}")]
    CaptainIsViceCaptain { player_id: PlayerId },

    #[error("Bench must have exactly {expected} players, got {actual}")]
    BenchWrongSize { expected: usize, actual: usize },

    #[error("Bench player {player_id} is not an unused squad player")]
    BenchMismatch { player_id: PlayerId },
}

/// Chip state machine errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChipError {
    #[error("Chip {chip} has no remaining uses this season")]
    AlreadyUsed { chip: Chip },

    #[error("Chip {active} is already active for gameweek {gameweek}")]
    ChipAlreadyActive { gameweek: GameweekId, active: Chip },

    #[error("Gameweek {gameweek} is already finished")]
    GameweekFinished { gameweek: GameweekId },

    #[error("Cannot revoke a chip after the gameweek {gameweek} deadline")]
    RevokeAfterDeadline { gameweek: GameweekId },

    #[error("No chip active for gameweek {gameweek}")]
    NoActiveChip { gameweek: GameweekId },
}
