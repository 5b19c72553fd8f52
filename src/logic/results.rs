//! Folding finished-match reports into the calendar and team counters.

use crate::models::{Fixture, MatchId, Score, SeasonError, Team, TeamId};
use chrono::Utc;

/// Record the final score of one fixture and update both teams' counters.
///
/// The fixture must exist and be unplayed, both of its teams must be in `teams`, and the score
/// must fit in both teams' goal tallies; otherwise nothing is changed. A fixture only ever
/// receives one result.
pub fn apply_result(
    fixtures: &mut [Fixture],
    teams: &mut [Team],
    match_id: MatchId,
    home_goals: u32,
    away_goals: u32,
) -> Result<(), SeasonError> {
    let fixture = fixtures
        .iter_mut()
        .find(|m| m.id == match_id)
        .ok_or(SeasonError::MatchNotFound(match_id))?;
    if fixture.is_played() {
        return Err(SeasonError::MatchAlreadyPlayed(match_id));
    }

    let home_idx = team_index(teams, fixture.home)?;
    let away_idx = team_index(teams, fixture.away)?;
    if !teams[home_idx].can_record(home_goals, away_goals)
        || !teams[away_idx].can_record(away_goals, home_goals)
    {
        return Err(SeasonError::GoalCountOverflow(match_id));
    }

    fixture.score = Some(Score {
        home_goals,
        away_goals,
    });
    fixture.played_at = Some(Utc::now());

    teams[home_idx].record_match(home_goals, away_goals);
    teams[away_idx].record_match(away_goals, home_goals);

    log::debug!(
        "Round {}: {} {}-{} {}",
        fixture.round,
        teams[home_idx].name,
        home_goals,
        away_goals,
        teams[away_idx].name
    );
    Ok(())
}

fn team_index(teams: &[Team], id: TeamId) -> Result<usize, SeasonError> {
    teams
        .iter()
        .position(|t| t.id == id)
        .ok_or(SeasonError::TeamNotFound(id))
}
