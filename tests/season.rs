//! Integration tests for the season lifecycle: start, results, completion.

use league_season::{
    apply_result, generate_fixtures, report_result, start_season, Score, Season, SeasonConfig,
    SeasonError, SeasonState, Team,
};
use uuid::Uuid;

fn season_with_teams(n: usize, config: SeasonConfig) -> Season {
    let teams: Vec<Team> = (0..n).map(|i| Team::new(format!("Club {i}"))).collect();
    Season::with_teams(teams, config)
}

fn started(n: usize) -> Season {
    let mut s = season_with_teams(n, SeasonConfig::default());
    start_season(&mut s).unwrap();
    s
}

#[test]
fn start_generates_calendar_in_roster_order() {
    let s = started(4);
    assert_eq!(s.state, SeasonState::InProgress);
    assert_eq!(s.fixtures.len(), 12);
    assert_eq!(s.round_count(), 6);
    assert_eq!(s.current_round(), Some(0));
    let first = s.next_fixture().unwrap();
    assert_eq!((first.home, first.away), (s.teams[0].id, s.teams[3].id));
    assert_eq!(s.fixtures_in_round(5).len(), 2);
}

#[test]
fn start_with_odd_roster_fails_and_changes_nothing() {
    let mut s = season_with_teams(5, SeasonConfig::default());
    let before = s.teams.clone();
    assert_eq!(
        start_season(&mut s),
        Err(SeasonError::InvalidRosterSize { size: 5 })
    );
    assert_eq!(s.state, SeasonState::Setup);
    assert!(s.fixtures.is_empty());
    assert_eq!(s.teams, before);
}

#[test]
fn start_with_bye_accepts_odd_roster() {
    let config = SeasonConfig {
        allow_bye: true,
        ..SeasonConfig::default()
    };
    let mut s = season_with_teams(5, config);
    start_season(&mut s).unwrap();
    assert_eq!(s.fixtures.len(), 20);
    assert_eq!(s.round_count(), 10);
}

#[test]
fn start_with_bye_rejects_single_team() {
    let config = SeasonConfig {
        allow_bye: true,
        ..SeasonConfig::default()
    };
    let mut s = season_with_teams(1, config);
    assert_eq!(
        start_season(&mut s),
        Err(SeasonError::InvalidRosterSize { size: 1 })
    );
    assert_eq!(s.state, SeasonState::Setup);
    assert!(s.fixtures.is_empty());
}

#[test]
fn start_rejects_duplicate_ids_when_configured() {
    let config = SeasonConfig {
        reject_duplicate_ids: true,
        ..SeasonConfig::default()
    };
    let mut s = season_with_teams(4, config);
    let dup = s.teams[0].id;
    s.teams[2] = Team::with_id(dup, "Impostor");
    assert_eq!(start_season(&mut s), Err(SeasonError::DuplicateTeam(dup)));
    assert_eq!(s.state, SeasonState::Setup);
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let config = SeasonConfig {
        shuffle_seed: Some(42),
        ..SeasonConfig::default()
    };
    let teams: Vec<Team> = (0..8).map(|i| Team::new(format!("Club {i}"))).collect();
    let mut a = Season::with_teams(teams.clone(), config);
    let mut b = Season::with_teams(teams.clone(), config);
    start_season(&mut a).unwrap();
    start_season(&mut b).unwrap();

    let order = |s: &Season| s.teams.iter().map(|t| t.id).collect::<Vec<_>>();
    assert_eq!(order(&a), order(&b));
    let mut sorted_a = order(&a);
    let mut sorted_in = teams.iter().map(|t| t.id).collect::<Vec<_>>();
    sorted_a.sort();
    sorted_in.sort();
    assert_eq!(sorted_a, sorted_in);

    let pairs = |s: &Season| s.fixtures.iter().map(|m| (m.home, m.away)).collect::<Vec<_>>();
    assert_eq!(pairs(&a), pairs(&b));
}

#[test]
fn report_updates_fixture_and_both_teams() {
    let mut s = started(4);
    let m = s.next_fixture().unwrap().clone();
    report_result(&mut s, m.id, 3, 1).unwrap();

    let played = s.get_fixture(m.id).unwrap();
    assert_eq!(
        played.score,
        Some(Score {
            home_goals: 3,
            away_goals: 1
        })
    );
    assert!(played.played_at.is_some());

    let home = s.get_team(m.home).unwrap();
    assert_eq!((home.wins, home.goals_scored, home.goals_conceded), (1, 3, 1));
    let away = s.get_team(m.away).unwrap();
    assert_eq!((away.losses, away.goals_scored, away.goals_conceded), (1, 1, 3));
    assert_eq!(s.standings()[0].id, m.home);
}

#[test]
fn draw_gives_both_teams_a_point() {
    let mut s = started(2);
    let m = s.next_fixture().unwrap().clone();
    report_result(&mut s, m.id, 2, 2).unwrap();
    for t in &s.teams {
        assert_eq!((t.draws, t.points()), (1, 1));
    }
}

#[test]
fn result_can_only_be_reported_once() {
    let mut s = started(4);
    let id = s.fixtures[0].id;
    report_result(&mut s, id, 1, 0).unwrap();
    let snapshot = s.teams.clone();
    assert_eq!(
        report_result(&mut s, id, 0, 5),
        Err(SeasonError::MatchAlreadyPlayed(id))
    );
    assert_eq!(s.teams, snapshot);
}

#[test]
fn overflowing_score_is_rejected_without_changes() {
    let mut s = started(2);
    let ids: Vec<_> = s.fixtures.iter().map(|m| m.id).collect();
    report_result(&mut s, ids[0], u32::MAX, 0).unwrap();
    let teams_before = s.teams.clone();
    let fixture_before = s.get_fixture(ids[1]).unwrap().clone();

    assert_eq!(
        report_result(&mut s, ids[1], 0, 1),
        Err(SeasonError::GoalCountOverflow(ids[1]))
    );
    assert_eq!(s.teams, teams_before);
    assert_eq!(s.get_fixture(ids[1]), Some(&fixture_before));
    assert_eq!(s.state, SeasonState::InProgress);

    report_result(&mut s, ids[1], 0, 0).unwrap();
    assert_eq!(s.state, SeasonState::Completed);
}

#[test]
fn unknown_match_is_rejected() {
    let mut s = started(4);
    let id = Uuid::new_v4();
    assert_eq!(report_result(&mut s, id, 1, 1), Err(SeasonError::MatchNotFound(id)));
}

#[test]
fn report_requires_season_in_progress() {
    let mut s = season_with_teams(4, SeasonConfig::default());
    assert_eq!(
        report_result(&mut s, Uuid::new_v4(), 1, 0),
        Err(SeasonError::InvalidState)
    );
}

#[test]
fn apply_result_checks_roster_before_mutating() {
    let teams: Vec<Team> = (0..4).map(|i| Team::new(format!("Club {i}"))).collect();
    let mut fixtures = generate_fixtures(&teams).unwrap();
    let mut short_roster = teams[..3].to_vec();
    let id = fixtures[0].id;
    let missing = fixtures[0].away;

    assert_eq!(
        apply_result(&mut fixtures, &mut short_roster, id, 2, 0),
        Err(SeasonError::TeamNotFound(missing))
    );
    assert!(!fixtures[0].is_played());
    assert!(short_roster.iter().all(|t| t.played() == 0));
}

#[test]
fn season_completes_after_last_result_and_can_restart() {
    let mut s = started(4);
    let ids: Vec<_> = s.fixtures.iter().map(|m| m.id).collect();
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(s.state, SeasonState::InProgress);
        report_result(&mut s, *id, (i % 3) as u32, 1).unwrap();
    }
    assert_eq!(s.state, SeasonState::Completed);
    assert!(s.is_complete());
    assert!(s.next_fixture().is_none());
    assert_eq!(s.current_round(), None);
    assert!(s.teams.iter().all(|t| t.played() == 6));

    let old_calendar: Vec<_> = s.fixtures.iter().map(|m| m.id).collect();
    start_season(&mut s).unwrap();
    assert_eq!(s.state, SeasonState::InProgress);
    assert!(s.teams.iter().all(|t| t.played() == 0 && t.goals_scored == 0));
    assert!(s.fixtures.iter().all(|m| !old_calendar.contains(&m.id)));
}

#[test]
fn cannot_start_twice_while_in_progress() {
    let mut s = started(4);
    assert_eq!(start_season(&mut s), Err(SeasonError::InvalidState));
}

#[test]
fn table_follows_reported_results() {
    let mut s = started(4);
    let round0: Vec<_> = s.fixtures_in_round(0).iter().map(|m| m.id).collect();
    report_result(&mut s, round0[0], 4, 0).unwrap();
    report_result(&mut s, round0[1], 1, 1).unwrap();

    let table = s.standings_table();
    assert_eq!(table[0].team_id, s.teams[0].id);
    assert_eq!(table[0].points, 3);
    assert_eq!(table[3].team_id, s.teams[3].id);
    assert_eq!(table[3].goal_difference, -4);
    assert_eq!(s.current_round(), Some(1));
}
