//! Data structures for a league season: teams, fixtures, season state.

mod fixture;
mod season;
mod team;

pub use fixture::{Fixture, MatchId, Score};
pub use season::{Season, SeasonConfig, SeasonError, SeasonId, SeasonState};
pub use team::{Team, TeamId, POINTS_PER_WIN};
