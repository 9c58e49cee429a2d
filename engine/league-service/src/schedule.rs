//! The gameweek schedule
//!
//! Gameweeks are keyed by sequential integer id. Finishing a gameweek is
//! one-way: once set, its stats are immutable and its scoring is final.

use crate::error::{Result, ServiceError};
use chrono::{DateTime, Utc};
use league_rules::{Gameweek, GameweekId};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Default)]
pub struct GameweekSchedule {
    rows: RwLock<BTreeMap<GameweekId, Gameweek>>,
}

impl GameweekSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the next gameweek with the given deadline
    pub fn create(&self, deadline: DateTime<Utc>) -> Gameweek {
        let mut rows = self.rows.write();
        let id = rows.keys().next_back().map(|last| last + 1).unwrap_or(1);
        let gameweek = Gameweek::new(id, deadline);
        rows.insert(id, gameweek.clone());
        info!("Created gameweek {} with deadline {}", gameweek.label, deadline);
        gameweek
    }

    /// Fetch a gameweek by id
    pub fn get(&self, gameweek: GameweekId) -> Result<Gameweek> {
        self.rows
            .read()
            .get(&gameweek)
            .cloned()
            .ok_or(ServiceError::GameweekNotFound { gameweek })
    }

    /// Mark a gameweek finished.
    ///
    /// Errors if it already is, so close-of-week side effects (transfer
    /// banking) run exactly once.
    pub fn finish(&self, gameweek: GameweekId) -> Result<Gameweek> {
        let mut rows = self.rows.write();
        let row = rows
            .get_mut(&gameweek)
            .ok_or(ServiceError::GameweekNotFound { gameweek })?;
        if row.finished {
            return Err(ServiceError::GameweekFinished { gameweek });
        }
        row.finished = true;
        info!("Gameweek {} finished", row.label);
        Ok(row.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_ids_are_sequential() {
        let schedule = GameweekSchedule::new();
        let deadline = Utc::now() + Duration::hours(1);

        assert_eq!(schedule.create(deadline).id, 1);
        assert_eq!(schedule.create(deadline).id, 2);
        assert_eq!(schedule.get(2).unwrap().label, "GW2");
    }

    #[test]
    fn test_finish_is_one_way_and_single_shot() {
        let schedule = GameweekSchedule::new();
        let gameweek = schedule.create(Utc::now() + Duration::hours(1));

        assert!(schedule.finish(gameweek.id).unwrap().finished);
        assert!(matches!(
            schedule.finish(gameweek.id),
            Err(ServiceError::GameweekFinished { gameweek: 1 })
        ));
    }

    #[test]
    fn test_missing_gameweek() {
        let schedule = GameweekSchedule::new();
        assert!(matches!(schedule.get(7), Err(ServiceError::GameweekNotFound { gameweek: 7 })));
    }
}
