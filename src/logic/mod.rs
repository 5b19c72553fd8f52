//! Season business logic: calendar generation, results, standings.

mod fixtures;
mod results;
mod season;
mod standings;

pub use fixtures::{
    ensure_unique_ids, generate_fixtures, generate_fixtures_checked, generate_fixtures_with_bye,
};
pub use results::apply_result;
pub use season::{report_result, start_season};
pub use standings::{compare_teams, compute_standings, standings_table, StandingsRow};
