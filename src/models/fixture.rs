//! Scheduled match (fixture) and its final score.

use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a fixture.
pub type MatchId = Uuid;

/// Final score of a played fixture.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub home_goals: u32,
    pub away_goals: u32,
}

/// One match of the calendar. `home` and `away` are fixed at creation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: MatchId,
    pub home: TeamId,
    pub away: TeamId,
    /// Matchweek, starting at 0.
    pub round: u32,
    /// None if not yet played.
    pub score: Option<Score>,
    pub played_at: Option<DateTime<Utc>>,
}

impl Fixture {
    pub fn new(home: TeamId, away: TeamId, round: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            home,
            away,
            round,
            score: None,
            played_at: None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.score.is_some()
    }

    /// Whether `team` takes part in this fixture, on either side.
    pub fn involves(&self, team: TeamId) -> bool {
        self.home == team || self.away == team
    }
}
