//! Team (league participant) and its result counters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in fixtures and lookups).
pub type TeamId = Uuid;

/// Points awarded for a win; a draw is worth one.
pub const POINTS_PER_WIN: u32 = 3;

/// A team in the league. Counters start at zero and only change through result application.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
}

impl Team {
    /// Create a new team with the given name. Counters start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Create a team with a caller-chosen id (e.g. restored from a save).
    pub fn with_id(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wins: 0,
            draws: 0,
            losses: 0,
            goals_scored: 0,
            goals_conceded: 0,
        }
    }

    pub fn points(&self) -> u32 {
        self.wins * POINTS_PER_WIN + self.draws
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_scored) - i64::from(self.goals_conceded)
    }

    pub fn played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    /// Whether [`Team::record_match`] can take this score without overflowing a goal counter.
    pub fn can_record(&self, scored: u32, conceded: u32) -> bool {
        self.goals_scored.checked_add(scored).is_some()
            && self.goals_conceded.checked_add(conceded).is_some()
    }

    /// Fold one finished match into the counters, from this team's point of view.
    /// Callers check [`Team::can_record`] first.
    pub fn record_match(&mut self, scored: u32, conceded: u32) {
        self.goals_scored += scored;
        self.goals_conceded += conceded;
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => self.wins += 1,
            std::cmp::Ordering::Equal => self.draws += 1,
            std::cmp::Ordering::Less => self.losses += 1,
        }
    }

    /// Zero all counters (season start).
    pub fn reset_counters(&mut self) {
        self.wins = 0;
        self.draws = 0;
        self.losses = 0;
        self.goals_scored = 0;
        self.goals_conceded = 0;
    }
}
