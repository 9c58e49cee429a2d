//! Shared fixtures for the rules tests

use crate::types::{Gameweek, GameweekId};
use chrono::{Duration, Utc};
use roster_catalog::{PlayerId, RosterCatalog, RosterFeedRecord};

/// A legal 15-player squad over the fixture catalog:
/// 2 QB, 5 RB, 5 WR, 1 TE, 1 K, 1 DST
pub const DEFAULT_SQUAD: [PlayerId; 15] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

/// A legal set of starters from `DEFAULT_SQUAD`: QB + 3 RB (one on FLEX) +
/// 2 WR + TE + K + DST
pub const DEFAULT_STARTERS: [PlayerId; 9] = [1, 3, 4, 5, 8, 9, 13, 14, 15];

/// The remaining six squad players, in bench priority order
pub const DEFAULT_BENCH: [PlayerId; 6] = [2, 6, 7, 10, 11, 12];

/// Catalog holding players 1-15 with the `DEFAULT_SQUAD` composition, plus
/// spare players 16 (RB), 17 (WR), and 18 (WR) for transfer scenarios
pub fn catalog_with_default_squad() -> RosterCatalog {
    let positions = [
        "QB", "QB", "RB", "RB", "RB", "RB", "RB", "WR", "WR", "WR", "WR", "WR", "TE", "K", "DST",
        "RB", "WR", "WR",
    ];

    let records: Vec<RosterFeedRecord> = positions
        .iter()
        .enumerate()
        .map(|(i, position)| RosterFeedRecord {
            external_id: format!("p{}", i + 1),
            name: format!("Player {}", i + 1),
            team: "BAL".to_string(),
            position: position.to_string(),
            is_active: true,
            depth_chart_order: None,
            years_experience: 0,
        })
        .collect();

    let mut catalog = RosterCatalog::new();
    catalog.sync(&records).expect("fixture roster must sync");
    catalog
}

/// A gameweek whose deadline is comfortably in the future
pub fn gameweek_open(id: GameweekId) -> Gameweek {
    Gameweek::new(id, Utc::now() + Duration::hours(24))
}
