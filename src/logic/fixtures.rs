//! Calendar generation: double round-robin by the circle method.

use crate::models::{Fixture, SeasonError, Team};
use std::collections::HashSet;

/// Generate the full two-leg calendar for an even roster of at least 2 teams.
///
/// The last roster entry holds the fixed seat; the other N-1 rotate around the ring one step
/// per round. In round `r`, slot `i` pairs ring positions `(r + i) % (N-1)` (home) and
/// `(N-1 - i + r) % (N-1)` (away), with slot 0's away side replaced by the fixed seat.
/// Round `N-1 + r` replays round `r` with home and away exchanged.
///
/// Output is round-major, N * (N-1) fixtures. Roster order seeds the rotation; duplicate ids
/// are not detected here (see [`generate_fixtures_checked`]).
pub fn generate_fixtures(teams: &[Team]) -> Result<Vec<Fixture>, SeasonError> {
    let n = teams.len();
    if n < 2 || n % 2 != 0 {
        return Err(SeasonError::InvalidRosterSize { size: n });
    }
    let fixtures: Vec<Fixture> = double_round_robin(n)
        .into_iter()
        .map(|(round, home, away)| Fixture::new(teams[home].id, teams[away].id, round))
        .collect();
    log::debug!(
        "Generated {} fixtures over {} rounds for {} teams",
        fixtures.len(),
        2 * (n - 1),
        n
    );
    Ok(fixtures)
}

/// Same as [`generate_fixtures`], but rejects a roster that repeats a team id.
pub fn generate_fixtures_checked(teams: &[Team]) -> Result<Vec<Fixture>, SeasonError> {
    ensure_unique_ids(teams)?;
    generate_fixtures(teams)
}

/// Fail with the first team id that repeats an earlier one.
pub fn ensure_unique_ids(teams: &[Team]) -> Result<(), SeasonError> {
    let mut seen = HashSet::with_capacity(teams.len());
    for t in teams {
        if !seen.insert(t.id) {
            return Err(SeasonError::DuplicateTeam(t.id));
        }
    }
    Ok(())
}

/// Generate a calendar for any roster of at least 2 teams. Odd rosters get a bye seat
/// appended; each round one team sits out and fixtures against the bye are left out of the
/// result. The bye is a seat, not a team id, so no real team can be mistaken for it.
///
/// Round numbers are those of the padded calendar, so every round still has an entry even
/// when a team sits it out.
pub fn generate_fixtures_with_bye(teams: &[Team]) -> Result<Vec<Fixture>, SeasonError> {
    if teams.len() < 2 {
        return Err(SeasonError::InvalidRosterSize { size: teams.len() });
    }
    if teams.len() % 2 == 0 {
        return generate_fixtures(teams);
    }
    let bye = teams.len();
    let fixtures: Vec<Fixture> = double_round_robin(bye + 1)
        .into_iter()
        .filter(|&(_, home, away)| home != bye && away != bye)
        .map(|(round, home, away)| Fixture::new(teams[home].id, teams[away].id, round))
        .collect();
    log::debug!(
        "Generated {} fixtures for {} teams with a bye",
        fixtures.len(),
        teams.len()
    );
    Ok(fixtures)
}

/// Circle method over `n` seats (even, at least 2). Yields `(round, home seat, away seat)`.
fn double_round_robin(n: usize) -> Vec<(u32, usize, usize)> {
    let ring = n - 1;
    let fixed = ring;

    let first_leg: Vec<(u32, usize, usize)> = (0..ring)
        .flat_map(|round| {
            (0..n / 2).map(move |slot| {
                let home = (round + slot) % ring;
                let away = if slot == 0 {
                    fixed
                } else {
                    (ring - slot + round) % ring
                };
                (round as u32, home, away)
            })
        })
        .collect();

    let offset = ring as u32;
    let second_leg = first_leg
        .iter()
        .map(|&(round, home, away)| (round + offset, away, home));

    first_leg.iter().copied().chain(second_leg).collect()
}
