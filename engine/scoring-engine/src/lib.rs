//! Scoring Engine - converts raw stat lines into fantasy points
//!
//! Scores are fixed-point tenths throughout, so recomputing a finished
//! gameweek from the same stat lines and lineup is bit-identical. The weight
//! table is policy, carried in config with the standard game as defaults.

pub mod error;
pub mod feed;
pub mod points;
pub mod scorer;
pub mod stat_line;
pub mod weights;

pub use error::{ScoringError, StatFeedError};
pub use feed::{StatFeedClient, StatFeedRecord};
pub use points::Points;
pub use scorer::{score_lineup, score_stat_line, LineupScore, PlayerScore};
pub use stat_line::StatLine;
pub use weights::{PointsAllowedBand, ScoringWeights};
