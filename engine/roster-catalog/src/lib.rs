//! Roster Catalog - player reference data for the fantasy engine
//!
//! The catalog owns player identity, team, position, and current price.
//! It is populated by syncing batches from the upstream roster feed and is
//! read-only to every other component.

pub mod catalog;
pub mod client;
pub mod error;
pub mod feed;
pub mod pricing;
pub mod types;

pub use catalog::{RosterCatalog, SyncReport};
pub use client::RosterFeedClient;
pub use error::{CatalogError, FeedError};
pub use feed::RosterFeedRecord;
pub use types::{Player, PlayerId, Position};
