//! Squad composition and budget validation

use crate::config::RulesConfig;
use crate::error::{SquadRejection, SquadViolation};
use crate::types::Gameweek;
use chrono::{DateTime, Utc};
use roster_catalog::{PlayerId, Position, RosterCatalog};
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};

/// An accepted 15-player squad for one (entry, gameweek).
///
/// Order is irrelevant; the set is replaced wholesale on every accepted
/// submission, never patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Squad {
    players: BTreeSet<PlayerId>,

    /// Total price at validation time
    pub total_cost: Decimal,
}

impl Squad {
    /// The player set
    pub fn players(&self) -> &BTreeSet<PlayerId> {
        &self.players
    }

    /// Whether the squad owns a player
    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.players.contains(&player_id)
    }

    /// Number of players in the squad
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the squad is empty
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players in this squad that are not in `other`
    pub fn players_not_in(&self, other: &Squad) -> usize {
        self.players.difference(&other.players).count()
    }
}

/// Squad Validator - enforces size, uniqueness, position caps, budget, and
/// the submission deadline
pub struct SquadValidator<'a> {
    catalog: &'a RosterCatalog,
    config: &'a RulesConfig,
}

impl<'a> SquadValidator<'a> {
    pub fn new(catalog: &'a RosterCatalog, config: &'a RulesConfig) -> Self {
        Self { catalog, config }
    }

    /// Validate a candidate player set against the budget and the gameweek
    /// deadline.
    ///
    /// Returns the accepted `Squad`, or every violation found. An active
    /// wildcard suspends the deadline restriction for the gameweek. No state
    /// is touched on rejection; the caller replaces its stored squad only on
    /// acceptance.
    pub fn validate(
        &self,
        candidate: &[PlayerId],
        budget: Decimal,
        gameweek: &Gameweek,
        now: DateTime<Utc>,
        wildcard_active: bool,
    ) -> Result<Squad, SquadRejection> {
        let mut violations = Vec::new();

        if gameweek.deadline_passed(now) && !wildcard_active {
            violations.push(SquadViolation::DeadlinePassed { gameweek: gameweek.id });
        }

        if candidate.len() != self.config.squad_size {
            violations.push(SquadViolation::WrongSize {
                expected: self.config.squad_size,
                actual: candidate.len(),
            });
        }

        let mut players = BTreeSet::new();
        for &player_id in candidate {
            if !players.insert(player_id) {
                violations.push(SquadViolation::DuplicatePlayer { player_id });
            }
        }

        let mut position_counts: HashMap<Position, u8> = HashMap::new();
        let mut total_cost = Decimal::ZERO;
        for &player_id in &players {
            match self.catalog.get(player_id) {
                Ok(player) => {
                    *position_counts.entry(player.position).or_insert(0) += 1;
                    total_cost += player.price;
                }
                Err(_) => violations.push(SquadViolation::UnknownPlayer { player_id }),
            }
        }

        for position in Position::ALL {
            let cap = self.config.squad_limits.cap(position);
            let actual = position_counts.get(&position).copied().unwrap_or(0);
            if actual > cap {
                violations.push(SquadViolation::PositionCapExceeded { position, cap, actual });
            }
        }

        if total_cost > budget {
            violations.push(SquadViolation::OverBudget { cost: total_cost, budget });
        }

        if violations.is_empty() {
            Ok(Squad { players, total_cost })
        } else {
            Err(SquadRejection { violations })
        }
    }
}
