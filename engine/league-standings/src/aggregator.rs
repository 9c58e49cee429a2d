use league_rules::{EntryId, GameweekId};
use scoring_engine::Points;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// One ranked row in the standings query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub entry_id: EntryId,
    pub team_name: String,
    pub cumulative_points: Points,
}

/// Cumulative league standings.
///
/// The running total can decrease: a net-negative gameweek (hits exceeding
/// points) is added as-is, never clamped.
#[derive(Debug, Clone, Default)]
pub struct Standings {
    results: HashMap<EntryId, BTreeMap<GameweekId, Points>>,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry's net result for a gameweek.
    ///
    /// Recording the same (entry, gameweek) again replaces the previous
    /// value, which makes a re-run scoring pass a no-op.
    pub fn record(&mut self, entry_id: EntryId, gameweek: GameweekId, net: Points) {
        let previous = self.results.entry(entry_id).or_default().insert(gameweek, net);
        if let Some(previous) = previous {
            if previous != net {
                debug!(
                    "Rescored entry {} gameweek {}: {} -> {}",
                    entry_id, gameweek, previous, net
                );
            }
        }
    }

    /// An entry's cumulative total
    pub fn total(&self, entry_id: EntryId) -> Points {
        self.results
            .get(&entry_id)
            .map(|rows| rows.values().copied().sum())
            .unwrap_or(Points::ZERO)
    }

    /// An entry's recorded result for one gameweek
    pub fn result(&self, entry_id: EntryId, gameweek: GameweekId) -> Option<Points> {
        self.results.get(&entry_id).and_then(|rows| rows.get(&gameweek)).copied()
    }

    /// The ranked table over the given entries.
    ///
    /// Ordered by cumulative points descending, ties broken by team name
    /// ascending. Entries with no recorded results rank at zero.
    pub fn table(&self, teams: &HashMap<EntryId, String>) -> Vec<StandingRow> {
        let mut rows: Vec<StandingRow> = teams
            .iter()
            .map(|(&entry_id, team_name)| StandingRow {
                entry_id,
                team_name: team_name.clone(),
                cumulative_points: self.total(entry_id),
            })
            .collect();

        rows.sort_by(|a, b| {
            b.cumulative_points
                .cmp(&a.cumulative_points)
                .then_with(|| a.team_name.cmp(&b.team_name))
        });
        rows
    }
}
