use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// League entry id (one per manager per league)
pub type EntryId = i64;

/// Sequential gameweek id, starting at 1
pub type GameweekId = u32;

/// One scoring period with a submission deadline.
///
/// Once `finished` is set the gameweek's stats are immutable and its scoring
/// is final; the flag is never cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gameweek {
    /// Sequential id
    pub id: GameweekId,

    /// Display label (e.g., "GW1")
    pub label: String,

    /// Submission deadline
    pub deadline: DateTime<Utc>,

    /// Whether the gameweek has closed
    pub finished: bool,
}

impl Gameweek {
    pub fn new(id: GameweekId, deadline: DateTime<Utc>) -> Self {
        Self { id, label: format!("GW{id}"), deadline, finished: false }
    }

    /// Whether the submission deadline has passed at `now`
    pub fn deadline_passed(&self, now: DateTime<Utc>) -> bool {
        now >= self.deadline
    }
}
