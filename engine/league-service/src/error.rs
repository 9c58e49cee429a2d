//! Error types for the league service
//!
//! The taxonomy the service surfaces to callers: validation failures carry
//! the full violation detail from the rules crate, state conflicts name the
//! offending state, feed errors are retryable, and revision conflicts tell a
//! losing writer to resubmit with fresh state. No error leaves partial
//! mutations behind.

use league_rules::{ChipError, EntryId, GameweekId, LineupViolation, SquadRejection};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    SquadRejected(#[from] SquadRejection),

    #[error("Lineup rejected: {0}")]
    LineupRejected(#[from] LineupViolation),

    #[error("{0}")]
    Chip(#[from] ChipError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] roster_catalog::CatalogError),

    #[error("Roster feed error: {0}")]
    RosterFeed(#[from] roster_catalog::FeedError),

    #[error("Stat feed error: {0}")]
    StatFeed(#[from] scoring_engine::StatFeedError),

    #[error("Scoring error: {0}")]
    Scoring(#[from] scoring_engine::ScoringError),

    #[error("Feed unavailable: {message}")]
    FeedUnavailable { message: String },

    #[error("Entry not found: {entry_id}")]
    EntryNotFound { entry_id: EntryId },

    #[error("Gameweek not found: {gameweek}")]
    GameweekNotFound { gameweek: GameweekId },

    #[error("Gameweek {gameweek} is already finished")]
    GameweekFinished { gameweek: GameweekId },

    #[error("Gameweek {gameweek} is not finished; scoring is not final")]
    GameweekNotFinished { gameweek: GameweekId },

    #[error("Deadline for gameweek {gameweek} has passed")]
    DeadlinePassed { gameweek: GameweekId },

    #[error("No squad on file for entry {entry_id} in gameweek {gameweek}")]
    SquadNotSet { entry_id: EntryId, gameweek: GameweekId },

    #[error(
        "Stale write for entry {entry_id} gameweek {gameweek}: \
         submission is based on revision {expected:?}, store has {found:?}"
    )]
    RevisionConflict {
        entry_id: EntryId,
        gameweek: GameweekId,
        expected: Option<u64>,
        found: Option<u64>,
    },
}
