//! League table: ranking teams by their accumulated counters.

use crate::models::{Team, TeamId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One line of the league table (for API / display).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    /// 1-based.
    pub position: usize,
    pub team_id: TeamId,
    pub name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

/// Best-first comparison: points, then goal difference, then goals scored.
pub fn compare_teams(a: &Team, b: &Team) -> Ordering {
    b.points()
        .cmp(&a.points())
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_scored.cmp(&a.goals_scored))
}

/// Rank teams best-first. Teams level on every key keep their input order.
///
/// Works on a copy; the input is left untouched, so this is safe to call at any time.
pub fn compute_standings(teams: &[Team]) -> Vec<Team> {
    let mut ranked = teams.to_vec();
    ranked.sort_by(compare_teams);
    ranked
}

/// Ranked table rows in [`compute_standings`] order.
pub fn standings_table(teams: &[Team]) -> Vec<StandingsRow> {
    compute_standings(teams)
        .into_iter()
        .enumerate()
        .map(|(i, t)| StandingsRow {
            position: i + 1,
            team_id: t.id,
            played: t.played(),
            wins: t.wins,
            draws: t.draws,
            losses: t.losses,
            goals_for: t.goals_scored,
            goals_against: t.goals_conceded,
            goal_difference: t.goal_difference(),
            points: t.points(),
            name: t.name,
        })
        .collect()
}
