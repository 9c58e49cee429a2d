use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Engine-internal player id, assigned by the catalog on first sync
pub type PlayerId = i64;

/// NFL fantasy position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DST,
}

impl Position {
    /// All positions, in display order
    pub const ALL: [Position; 6] =
        [Position::QB, Position::RB, Position::WR, Position::TE, Position::K, Position::DST];

    /// Parse a feed position code. The roster feed uses "DEF" for
    /// defense/special teams; the engine models it as DST.
    pub fn from_feed_code(code: &str) -> Option<Position> {
        match code {
            "QB" => Some(Position::QB),
            "RB" => Some(Position::RB),
            "WR" => Some(Position::WR),
            "TE" => Some(Position::TE),
            "K" => Some(Position::K),
            "DST" | "DEF" => Some(Position::DST),
            _ => None,
        }
    }

    /// Whether this position can fill the FLEX starting slot
    pub fn is_flex_eligible(&self) -> bool {
        matches!(self, Position::RB | Position::WR | Position::TE)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DST => "DST",
        };
        write!(f, "{code}")
    }
}

/// A player as the engine sees it: identity plus the current price.
///
/// Immutable within a gameweek; the sync may move the price between
/// gameweeks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Engine-internal id
    pub id: PlayerId,

    /// Upstream feed id, the sync key
    pub external_id: String,

    /// Player name (e.g., "Lamar Jackson")
    pub name: String,

    /// Team abbreviation (e.g., "BAL")
    pub team: String,

    /// Fantasy position
    pub position: Position,

    /// Current price in budget units, two-decimal precision
    pub price: Decimal,

    /// Whether the player is on an active roster upstream
    pub is_active: bool,

    /// When the sync last touched this record
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_code_parsing() {
        assert_eq!(Position::from_feed_code("QB"), Some(Position::QB));
        assert_eq!(Position::from_feed_code("DEF"), Some(Position::DST));
        assert_eq!(Position::from_feed_code("DST"), Some(Position::DST));
        assert_eq!(Position::from_feed_code("P"), None);
    }

    #[test]
    fn test_flex_eligibility() {
        assert!(Position::RB.is_flex_eligible());
        assert!(Position::WR.is_flex_eligible());
        assert!(Position::TE.is_flex_eligible());
        assert!(!Position::QB.is_flex_eligible());
        assert!(!Position::K.is_flex_eligible());
        assert!(!Position::DST.is_flex_eligible());
    }
}
