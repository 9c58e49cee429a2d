//! League Service
//!
//! Orchestrates the fantasy engine: entries, the gameweek schedule, squad
//! and lineup stores, stat ingestion, the scoring run, and the standings
//! query. The underlying rules live in the `league-rules` and
//! `scoring-engine` crates; this crate owns state and serialization of
//! writes.

pub mod config;
pub mod entry;
pub mod error;
pub mod logging;
pub mod schedule;
pub mod service;
pub mod store;

pub use config::{load_config, FeedConfig, LoggingConfig, ServiceConfig};
pub use entry::LeagueEntry;
pub use error::{Result, ServiceError};
pub use logging::initialize_logging;
pub use schedule::GameweekSchedule;
pub use service::{LeagueService, ScoredEntry, SquadSubmission};
pub use store::{LineupRecord, LineupStore, SquadRecord, SquadStore, StatStore};
