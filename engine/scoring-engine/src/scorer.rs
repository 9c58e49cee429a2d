//! Per-player and per-lineup scoring
//!
//! The weight table is applied uniformly to a stat line; only the
//! points-allowed banding is position-gated (DST). Captain multipliers and
//! the bench-boost inclusion happen at the lineup level, and the transfer
//! hit is deducted from the period total.

use crate::error::ScoringError;
use crate::points::Points;
use crate::stat_line::StatLine;
use crate::weights::ScoringWeights;
use league_rules::{Chip, Lineup};
use roster_catalog::{PlayerId, Position, RosterCatalog};
use std::collections::HashMap;

/// One starter's contribution to a period total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerScore {
    pub player_id: PlayerId,

    /// Raw points from the stat line
    pub base: Points,

    /// Captain multiplier applied to this player (1 for everyone else)
    pub multiplier: i64,

    /// Multiplier-adjusted points
    pub total: Points,
}

/// An entry's scored lineup for one gameweek
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupScore {
    /// Per-starter breakdown, multiplier included
    pub starters: Vec<PlayerScore>,

    /// Multiplier-adjusted starter sum
    pub starter_points: Points,

    /// Bench sum (counted in `total` only under bench_boost)
    pub bench_points: Points,

    /// The player whose score carried the captain multiplier
    pub effective_captain: PlayerId,

    /// False when the vice-captain fallback fired
    pub captain_played: bool,

    /// Transfer hit deducted from the total
    pub hit: Points,

    /// The period total: starters (+ bench under bench_boost) - hit
    pub total: Points,
}

/// Score one raw stat line.
///
/// Yardage scores by floor division; the points-allowed banding applies to
/// DST lines only.
pub fn score_stat_line(line: &StatLine, position: Position, weights: &ScoringWeights) -> Points {
    let mut points = Points::ZERO;

    // Passing
    points += Points::from_points((line.pass_yd / weights.pass_yds_per_point) as i64);
    points += weights.pass_td * line.pass_td as i64;
    points += weights.int_thrown * line.int_thrown as i64;

    // Rushing
    points += Points::from_points((line.rush_yd / weights.rush_yds_per_point) as i64);
    points += weights.rush_td * line.rush_td as i64;
    points += weights.fumble_lost * line.fumbles_lost as i64;

    // Receiving
    points += weights.reception * line.rec as i64;
    points += Points::from_points((line.rec_yd / weights.rec_yds_per_point) as i64);
    points += weights.rec_td * line.rec_td as i64;

    // Kicking
    points += weights.fg_made * line.fg_made as i64;
    points += weights.fg_missed * line.fg_missed as i64;
    points += weights.xp_made * line.xp_made as i64;
    points += weights.xp_missed * line.xp_missed as i64;

    // Defense/special teams
    points += weights.dst_sack * line.dst_sacks as i64;
    points += weights.dst_int * line.dst_int as i64;
    points += weights.dst_fumble_rec * line.dst_fumble_rec as i64;
    points += weights.dst_td * line.dst_td as i64;
    if position == Position::DST {
        points += weights.points_allowed_score(line.points_allowed);
    }

    points
}

/// Score a validated lineup for one gameweek.
///
/// Players without a stat line score zero. The captain multiplier falls back
/// to the vice-captain when the captain's line shows zero statistical
/// involvement (or is absent). Deterministic: the same lineup, stat lines,
/// chip, and hit always produce the same totals.
pub fn score_lineup(
    lineup: &Lineup,
    stats: &HashMap<PlayerId, StatLine>,
    catalog: &RosterCatalog,
    chip: Option<Chip>,
    hit_points: i64,
    weights: &ScoringWeights,
) -> Result<LineupScore, ScoringError> {
    let captain_played = stats.get(&lineup.captain).map(|l| !l.is_blank()).unwrap_or(false);
    let effective_captain = if captain_played { lineup.captain } else { lineup.vice_captain };

    let multiplier = match chip {
        Some(Chip::TripleCaptain) => weights.triple_captain_multiplier,
        _ => weights.captain_multiplier,
    };

    let mut starters = Vec::with_capacity(lineup.starters.len());
    let mut starter_points = Points::ZERO;
    for &player_id in &lineup.starters {
        let base = player_base(player_id, stats, catalog, weights)?;
        let player_multiplier = if player_id == effective_captain { multiplier } else { 1 };
        let total = base * player_multiplier;
        starter_points += total;
        starters.push(PlayerScore { player_id, base, multiplier: player_multiplier, total });
    }

    let mut bench_points = Points::ZERO;
    for &player_id in &lineup.bench {
        bench_points += player_base(player_id, stats, catalog, weights)?;
    }

    let hit = Points::from_points(hit_points);
    let mut total = starter_points - hit;
    if chip == Some(Chip::BenchBoost) {
        total += bench_points;
    }

    Ok(LineupScore {
        starters,
        starter_points,
        bench_points,
        effective_captain,
        captain_played,
        hit,
        total,
    })
}

fn player_base(
    player_id: PlayerId,
    stats: &HashMap<PlayerId, StatLine>,
    catalog: &RosterCatalog,
    weights: &ScoringWeights,
) -> Result<Points, ScoringError> {
    let position = catalog.get(player_id)?.position;
    Ok(stats
        .get(&player_id)
        .map(|line| score_stat_line(line, position, weights))
        .unwrap_or(Points::ZERO))
}
