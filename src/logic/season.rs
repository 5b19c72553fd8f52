//! Season lifecycle: starting a season and reporting results.

use crate::logic::fixtures::{ensure_unique_ids, generate_fixtures, generate_fixtures_with_bye};
use crate::logic::results::apply_result;
use crate::logic::standings::{compute_standings, standings_table, StandingsRow};
use crate::models::{Fixture, MatchId, Season, SeasonConfig, SeasonError, SeasonState, Team};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Start (or restart) the season: reset counters, order the roster and replace the calendar.
///
/// Valid from Setup or Completed. On error the season is left exactly as it was.
pub fn start_season(season: &mut Season) -> Result<(), SeasonError> {
    if season.state == SeasonState::InProgress {
        return Err(SeasonError::InvalidState);
    }

    let mut roster = season.teams.clone();
    if let Some(seed) = season.config.shuffle_seed {
        roster.shuffle(&mut StdRng::seed_from_u64(seed));
    }
    let fixtures = schedule(&roster, &season.config)?;

    for t in &mut roster {
        t.reset_counters();
    }
    season.teams = roster;
    season.fixtures = fixtures;
    season.state = SeasonState::InProgress;
    log::info!(
        "Season {} started: {} teams, {} fixtures",
        season.id,
        season.teams.len(),
        season.fixtures.len()
    );
    Ok(())
}

fn schedule(roster: &[Team], config: &SeasonConfig) -> Result<Vec<Fixture>, SeasonError> {
    if config.reject_duplicate_ids {
        ensure_unique_ids(roster)?;
    }
    if config.allow_bye {
        generate_fixtures_with_bye(roster)
    } else {
        generate_fixtures(roster)
    }
}

/// Report a finished match (InProgress only). Completes the season after the last result.
pub fn report_result(
    season: &mut Season,
    match_id: MatchId,
    home_goals: u32,
    away_goals: u32,
) -> Result<(), SeasonError> {
    if season.state != SeasonState::InProgress {
        return Err(SeasonError::InvalidState);
    }
    apply_result(
        &mut season.fixtures,
        &mut season.teams,
        match_id,
        home_goals,
        away_goals,
    )?;
    if season.is_complete() {
        season.state = SeasonState::Completed;
        log::info!("Season {} completed", season.id);
    }
    Ok(())
}

impl Season {
    /// Current ranking, best first.
    pub fn standings(&self) -> Vec<Team> {
        compute_standings(&self.teams)
    }

    pub fn standings_table(&self) -> Vec<StandingsRow> {
        standings_table(&self.teams)
    }
}
