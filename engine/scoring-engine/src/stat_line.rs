//! Raw per-player statistical lines
//!
//! One line per (gameweek, player), produced by the upstream stats supplier.
//! The engine only reads them; once a gameweek is finished its lines are
//! immutable.

use league_rules::GameweekId;
use roster_catalog::PlayerId;
use serde::{Deserialize, Serialize};

/// Raw counters for one player in one gameweek
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub gameweek: GameweekId,
    pub player_id: PlayerId,

    // Passing
    pub pass_yd: u32,
    pub pass_td: u32,
    pub int_thrown: u32,

    // Rushing
    pub rush_yd: u32,
    pub rush_td: u32,

    // Receiving
    pub rec: u32,
    pub rec_yd: u32,
    pub rec_td: u32,

    pub fumbles_lost: u32,

    // Kicking
    pub fg_made: u32,
    pub fg_missed: u32,
    pub xp_made: u32,
    pub xp_missed: u32,

    // Defense/special teams
    pub dst_sacks: u32,
    pub dst_int: u32,
    pub dst_fumble_rec: u32,
    pub dst_td: u32,
    pub points_allowed: u32,
}

impl StatLine {
    /// A zeroed line for (gameweek, player)
    pub fn new(gameweek: GameweekId, player_id: PlayerId) -> Self {
        Self {
            gameweek,
            player_id,
            pass_yd: 0,
            pass_td: 0,
            int_thrown: 0,
            rush_yd: 0,
            rush_td: 0,
            rec: 0,
            rec_yd: 0,
            rec_td: 0,
            fumbles_lost: 0,
            fg_made: 0,
            fg_missed: 0,
            xp_made: 0,
            xp_missed: 0,
            dst_sacks: 0,
            dst_int: 0,
            dst_fumble_rec: 0,
            dst_td: 0,
            points_allowed: 0,
        }
    }

    /// Zero statistical involvement, treated as "did not play" for the
    /// captain fallback
    pub fn is_blank(&self) -> bool {
        self.pass_yd == 0
            && self.pass_td == 0
            && self.int_thrown == 0
            && self.rush_yd == 0
            && self.rush_td == 0
            && self.rec == 0
            && self.rec_yd == 0
            && self.rec_td == 0
            && self.fumbles_lost == 0
            && self.fg_made == 0
            && self.fg_missed == 0
            && self.xp_made == 0
            && self.xp_missed == 0
            && self.dst_sacks == 0
            && self.dst_int == 0
            && self.dst_fumble_rec == 0
            && self.dst_td == 0
            && self.points_allowed == 0
    }
}
