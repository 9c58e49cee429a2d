//! Standings Aggregator
//!
//! Folds gameweek results into cumulative totals and produces the league
//! ranking. Results are keyed by gameweek, so re-recording a recomputed
//! gameweek overwrites the previous value instead of double-adding.

pub mod aggregator;

pub use aggregator::{StandingRow, Standings};
