//! Roster feed record shape
//!
//! One record per player, as supplied by the upstream roster provider. The
//! engine maps the feed's "DEF" position code to DST and derives the price
//! itself; the feed never quotes prices.

use crate::error::FeedError;
use crate::types::Position;
use serde::{Deserialize, Serialize};

/// One player record from the upstream roster feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFeedRecord {
    /// Upstream player id, the sync key
    pub external_id: String,

    /// Player name
    pub name: String,

    /// Team abbreviation
    pub team: String,

    /// Position code; "DEF" is accepted and mapped to DST
    pub position: String,

    /// Whether the player is on an active roster
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Depth chart slot, 1 = first string
    pub depth_chart_order: Option<u32>,

    /// Completed NFL seasons
    #[serde(default)]
    pub years_experience: u32,
}

fn default_active() -> bool {
    true
}

impl RosterFeedRecord {
    /// Validate the record and resolve its position code.
    pub fn parse_position(&self) -> Result<Position, FeedError> {
        if self.name.trim().is_empty() {
            return Err(FeedError::MissingField {
                external_id: self.external_id.clone(),
                field: "name",
            });
        }
        if self.team.trim().is_empty() {
            return Err(FeedError::MissingField {
                external_id: self.external_id.clone(),
                field: "team",
            });
        }

        Position::from_feed_code(&self.position).ok_or_else(|| FeedError::UnknownPosition {
            external_id: self.external_id.clone(),
            position: self.position.clone(),
        })
    }
}
