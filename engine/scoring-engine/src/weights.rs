//! The per-statistic weight table
//!
//! Policy, not law: the defaults below are the standard game, and a league
//! can override any of them through config.

use crate::points::Points;
use serde::{Deserialize, Serialize};

/// One points-allowed band: applies when the defense allowed at most
/// `max_allowed` points (`None` = catch-all for everything above)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointsAllowedBand {
    pub max_allowed: Option<u32>,
    pub score: Points,
}

/// The full weight table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Passing yards per point (floor division)
    pub pass_yds_per_point: u32,
    pub pass_td: Points,
    pub int_thrown: Points,

    /// Rushing yards per point (floor division)
    pub rush_yds_per_point: u32,
    pub rush_td: Points,
    pub fumble_lost: Points,

    pub reception: Points,
    /// Receiving yards per point (floor division)
    pub rec_yds_per_point: u32,
    pub rec_td: Points,

    pub fg_made: Points,
    pub fg_missed: Points,
    pub xp_made: Points,
    pub xp_missed: Points,

    pub dst_sack: Points,
    pub dst_int: Points,
    pub dst_fumble_rec: Points,
    pub dst_td: Points,

    /// Points-allowed bands, checked in order; the first band whose
    /// `max_allowed` covers the value applies
    pub points_allowed_bands: Vec<PointsAllowedBand>,

    /// Captain multiplier
    pub captain_multiplier: i64,

    /// Captain multiplier under triple_captain
    pub triple_captain_multiplier: i64,
}

impl ScoringWeights {
    /// Band score for a defense's points allowed
    pub fn points_allowed_score(&self, allowed: u32) -> Points {
        for band in &self.points_allowed_bands {
            match band.max_allowed {
                Some(max) if allowed <= max => return band.score,
                Some(_) => continue,
                None => return band.score,
            }
        }
        Points::ZERO
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            pass_yds_per_point: 25,
            pass_td: Points::from_points(4),
            int_thrown: Points::from_points(-2),
            rush_yds_per_point: 10,
            rush_td: Points::from_points(6),
            fumble_lost: Points::from_points(-2),
            reception: Points::from_tenths(5),
            rec_yds_per_point: 10,
            rec_td: Points::from_points(6),
            fg_made: Points::from_points(3),
            fg_missed: Points::from_points(-1),
            xp_made: Points::from_points(1),
            xp_missed: Points::from_points(-1),
            dst_sack: Points::from_points(1),
            dst_int: Points::from_points(2),
            dst_fumble_rec: Points::from_points(2),
            dst_td: Points::from_points(6),
            points_allowed_bands: vec![
                PointsAllowedBand { max_allowed: Some(0), score: Points::from_points(10) },
                PointsAllowedBand { max_allowed: Some(6), score: Points::from_points(7) },
                PointsAllowedBand { max_allowed: Some(13), score: Points::from_points(4) },
                PointsAllowedBand { max_allowed: Some(20), score: Points::from_points(1) },
                PointsAllowedBand { max_allowed: Some(27), score: Points::ZERO },
                PointsAllowedBand { max_allowed: Some(34), score: Points::from_points(-1) },
                PointsAllowedBand { max_allowed: None, score: Points::from_points(-4) },
            ],
            captain_multiplier: 2,
            triple_captain_multiplier: 3,
        }
    }
}
