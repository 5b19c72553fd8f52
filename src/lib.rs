//! League season engine: double round-robin calendar and standings for a football league.

pub mod logic;
pub mod models;

pub use logic::{
    apply_result, compare_teams, compute_standings, ensure_unique_ids, generate_fixtures,
    generate_fixtures_checked, generate_fixtures_with_bye, report_result, standings_table,
    start_season, StandingsRow,
};
pub use models::{
    Fixture, MatchId, Score, Season, SeasonConfig, SeasonError, SeasonId, SeasonState, Team,
    TeamId, POINTS_PER_WIN,
};
