//! Season, SeasonConfig and SeasonState.

use crate::models::fixture::{Fixture, MatchId};
use crate::models::team::{Team, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during season operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SeasonError {
    /// Roster is odd or smaller than 2 (smaller than 2 when a bye is allowed).
    InvalidRosterSize { size: usize },
    /// The same team id appears more than once in the roster.
    DuplicateTeam(TeamId),
    /// No fixture with this id in the calendar.
    MatchNotFound(MatchId),
    /// The fixture already has a final score.
    MatchAlreadyPlayed(MatchId),
    /// The reported score would overflow a team's goal tally.
    GoalCountOverflow(MatchId),
    /// A fixture references a team that is not in the roster.
    TeamNotFound(TeamId),
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
    /// Team names must not be blank.
    InvalidTeamName,
    /// Season is not in a state that allows this action.
    InvalidState,
}

impl std::fmt::Display for SeasonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeasonError::InvalidRosterSize { size } => {
                write!(f, "Roster size must be even and at least 2 (got {})", size)
            }
            SeasonError::DuplicateTeam(id) => write!(f, "Team {} appears more than once", id),
            SeasonError::MatchNotFound(_) => write!(f, "Match not found"),
            SeasonError::MatchAlreadyPlayed(_) => write!(f, "Match already has a result"),
            SeasonError::GoalCountOverflow(_) => write!(f, "Reported score is out of range"),
            SeasonError::TeamNotFound(_) => write!(f, "Team not found"),
            SeasonError::DuplicateTeamName => write!(f, "A team with this name already exists"),
            SeasonError::InvalidTeamName => write!(f, "Team name must not be empty"),
            SeasonError::InvalidState => write!(f, "Invalid state for this action"),
        }
    }
}

impl std::error::Error for SeasonError {}

/// Unique identifier for a season.
pub type SeasonId = Uuid;

/// Scheduling options, passed in at construction.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonConfig {
    /// Shuffle the roster with this seed before scheduling; None keeps roster order.
    pub shuffle_seed: Option<u64>,
    /// Pad odd rosters with a bye instead of rejecting them.
    pub allow_bye: bool,
    /// Reject rosters with repeated team ids.
    pub reject_duplicate_ids: bool,
}

/// Current phase of the season.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonState {
    /// Adding teams; no calendar yet.
    #[default]
    Setup,
    /// Calendar generated, results being reported.
    InProgress,
    /// Every fixture has a result.
    Completed,
}

/// Full season state: roster, calendar and phase.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Season {
    pub id: SeasonId,
    pub config: SeasonConfig,
    /// Roster in scheduling order.
    pub teams: Vec<Team>,
    /// Calendar, round-major.
    pub fixtures: Vec<Fixture>,
    pub state: SeasonState,
    pub created_at: DateTime<Utc>,
}

impl Season {
    /// Create a new season in Setup state with no teams.
    pub fn new(config: SeasonConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            teams: Vec::new(),
            fixtures: Vec::new(),
            state: SeasonState::Setup,
            created_at: Utc::now(),
        }
    }

    /// Create a season with an initial roster. Still in Setup until started.
    pub fn with_teams(teams: Vec<Team>, config: SeasonConfig) -> Self {
        Self {
            teams,
            ..Self::new(config)
        }
    }

    pub fn get_team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn get_fixture(&self, id: MatchId) -> Option<&Fixture> {
        self.fixtures.iter().find(|m| m.id == id)
    }

    /// Add a team (Setup only). Names must be unique (case-insensitive).
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<TeamId, SeasonError> {
        if self.state != SeasonState::Setup {
            return Err(SeasonError::InvalidState);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(SeasonError::InvalidTeamName);
        }
        if self
            .teams
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(name_trimmed))
        {
            return Err(SeasonError::DuplicateTeamName);
        }
        let team = Team::new(name_trimmed);
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    /// Remove a team by id (Setup only).
    pub fn remove_team(&mut self, team_id: TeamId) -> Result<(), SeasonError> {
        if self.state != SeasonState::Setup {
            return Err(SeasonError::InvalidState);
        }
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or(SeasonError::TeamNotFound(team_id))?;
        self.teams.remove(idx);
        Ok(())
    }

    /// First unplayed fixture in calendar order.
    pub fn next_fixture(&self) -> Option<&Fixture> {
        self.fixtures.iter().find(|m| !m.is_played())
    }

    pub fn fixtures_in_round(&self, round: u32) -> Vec<&Fixture> {
        self.fixtures.iter().filter(|m| m.round == round).collect()
    }

    /// Round of the next unplayed fixture; None once the calendar is exhausted.
    pub fn current_round(&self) -> Option<u32> {
        self.next_fixture().map(|m| m.round)
    }

    pub fn round_count(&self) -> u32 {
        self.fixtures.iter().map(|m| m.round + 1).max().unwrap_or(0)
    }

    pub fn is_complete(&self) -> bool {
        !self.fixtures.is_empty() && self.fixtures.iter().all(Fixture::is_played)
    }
}
