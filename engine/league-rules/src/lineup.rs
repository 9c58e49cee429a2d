//! Lineup and formation validation
//!
//! Nine starters drawn from the squad, a captain and vice-captain among
//! them, and the remaining six squad players on the bench in caller-supplied
//! priority order. The FLEX slot is satisfied if any assignment of the
//! flex-eligible starters works; the validator only confirms one exists.

use crate::config::RulesConfig;
use crate::error::LineupViolation;
use crate::squad::Squad;
use roster_catalog::{PlayerId, Position, RosterCatalog};
use std::collections::{BTreeSet, HashMap};

/// A lineup submission as the caller supplies it
#[derive(Debug, Clone)]
pub struct LineupCandidate {
    /// Starter player ids
    pub starters: Vec<PlayerId>,

    /// The six non-starters, in auto-substitution priority order
    pub bench: Vec<PlayerId>,

    /// Captain (scores double, triple under triple_captain)
    pub captain: PlayerId,

    /// Vice-captain (inherits the multiplier if the captain did not play)
    pub vice_captain: PlayerId,
}

/// A validated lineup for one (entry, gameweek)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lineup {
    pub starters: BTreeSet<PlayerId>,
    pub bench: Vec<PlayerId>,
    pub captain: PlayerId,
    pub vice_captain: PlayerId,
}

/// Lineup Validator - enforces the starter subset, the formation with its
/// FLEX slot, captaincy, and the bench complement
pub struct LineupValidator<'a> {
    catalog: &'a RosterCatalog,
    config: &'a RulesConfig,
}

impl<'a> LineupValidator<'a> {
    pub fn new(catalog: &'a RosterCatalog, config: &'a RulesConfig) -> Self {
        Self { catalog, config }
    }

    /// Validate a candidate against the owning squad, rejecting on the first
    /// failing condition.
    pub fn validate(
        &self,
        candidate: &LineupCandidate,
        squad: &Squad,
    ) -> Result<Lineup, LineupViolation> {
        if candidate.starters.len() != self.config.starter_count {
            return Err(LineupViolation::WrongStarterCount {
                expected: self.config.starter_count,
                actual: candidate.starters.len(),
            });
        }

        let mut starters = BTreeSet::new();
        for &player_id in &candidate.starters {
            if !starters.insert(player_id) {
                return Err(LineupViolation::DuplicateStarter { player_id });
            }
            if !squad.contains(player_id) {
                return Err(LineupViolation::StarterNotInSquad { player_id });
            }
        }

        self.check_formation(&starters)?;

        if !starters.contains(&candidate.captain) {
            return Err(LineupViolation::CaptainNotStarter { player_id: candidate.captain });
        }
        if !starters.contains(&candidate.vice_captain) {
            return Err(LineupViolation::ViceCaptainNotStarter {
                player_id: candidate.vice_captain,
            });
        }
        if candidate.captain == candidate.vice_captain {
            return Err(LineupViolation::CaptainIsViceCaptain { player_id: candidate.captain });
        }

        let bench_size = self.config.squad_size - self.config.starter_count;
        if candidate.bench.len() != bench_size {
            return Err(LineupViolation::BenchWrongSize {
                expected: bench_size,
                actual: candidate.bench.len(),
            });
        }
        let mut bench_seen = BTreeSet::new();
        for &player_id in &candidate.bench {
            let unused = squad.contains(player_id)
                && !starters.contains(&player_id)
                && bench_seen.insert(player_id);
            if !unused {
                return Err(LineupViolation::BenchMismatch { player_id });
            }
        }

        Ok(Lineup {
            starters,
            bench: candidate.bench.clone(),
            captain: candidate.captain,
            vice_captain: candidate.vice_captain,
        })
    }

    /// Confirm the fixed formation plus FLEX is satisfiable.
    ///
    /// Each position must cover its fixed slots; the surplus must be
    /// flex-eligible and exactly fill the FLEX slots.
    fn check_formation(&self, starters: &BTreeSet<PlayerId>) -> Result<(), LineupViolation> {
        let mut counts: HashMap<Position, u8> = HashMap::new();
        for &player_id in starters {
            let player = self
                .catalog
                .get(player_id)
                .map_err(|_| LineupViolation::UnknownPlayer { player_id })?;
            *counts.entry(player.position).or_insert(0) += 1;
        }

        let formation = &self.config.formation;
        let mut flex_filled: u8 = 0;
        for position in Position::ALL {
            let required = formation.fixed(position);
            let actual = counts.get(&position).copied().unwrap_or(0);
            if actual < required {
                return Err(LineupViolation::FormationUnsatisfied { position, required, actual });
            }
            let surplus = actual - required;
            if surplus > 0 && !position.is_flex_eligible() {
                return Err(LineupViolation::FormationUnsatisfied { position, required, actual });
            }
            flex_filled += surplus;
        }

        if flex_filled != formation.flex {
            return Err(LineupViolation::FlexUnsatisfied {
                required: formation.flex,
                actual: flex_filled,
            });
        }

        Ok(())
    }
}
