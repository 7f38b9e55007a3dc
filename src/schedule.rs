use std::collections::HashMap;

use log::debug;

use crate::error::SimulationError;
use crate::team::Team;

/// One home/away match assignment within a round.
#[derive(Clone, Copy, Debug)]
pub struct Pairing<'a> {
    pub home: &'a Team,
    pub away: &'a Team,
}

/// One time-slice of the schedule in which every team plays exactly once.
#[derive(Clone, Debug)]
pub struct Round<'a> {
    /// 1-based round number.
    pub number: u32,
    pub pairings: Vec<Pairing<'a>>,
}

/// Build the full round-robin schedule for an even number of teams.
///
/// Rotation ("circle") method: position `i` from the front is paired with
/// position `i` from the back; after each round the last element moves to
/// index 1 while index 0 stays fixed. Every unordered pair of teams meets
/// exactly once across `teams.len() - 1` rounds.
///
/// Home advantage is balanced with a running home count per team: the side
/// that has hosted less often so far is assigned home, ties keeping the
/// rotation's left-hand candidate at home.
///
/// The function is deterministic given the input order and never mutates
/// the caller's slice; rotation state lives in a local working list.
///
/// # Errors
/// [`SimulationError::InvalidInput`] if the team count is zero or odd.
pub fn build_rounds(teams: &[Team]) -> Result<Vec<Round<'_>>, SimulationError> {
    if teams.is_empty() {
        return Err(SimulationError::InvalidInput(
            "team count must not be zero".into(),
        ));
    }
    if teams.len() % 2 != 0 {
        return Err(SimulationError::InvalidInput(format!(
            "team count must be even, got {}",
            teams.len()
        )));
    }

    let round_count = teams.len() - 1;
    let matches_per_round = teams.len() / 2;

    let mut order: Vec<&Team> = teams.iter().collect();
    let mut home_counts: HashMap<&str, u32> =
        teams.iter().map(|team| (team.name.as_str(), 0)).collect();

    let mut rounds = Vec::with_capacity(round_count);
    for number in 1..=round_count as u32 {
        let mut pairings = Vec::with_capacity(matches_per_round);
        for position in 0..matches_per_round {
            // Pair from the front and the back of the working list.
            let front = order[position];
            let back = order[order.len() - 1 - position];

            let (home, away) = if home_counts[front.name.as_str()]
                <= home_counts[back.name.as_str()]
            {
                (front, back)
            } else {
                (back, front)
            };
            *home_counts
                .get_mut(home.name.as_str())
                .expect("home team came from the working list") += 1;

            debug!("scheduler: round {number}: [{}-{}]", home.name, away.name);
            pairings.push(Pairing { home, away });
        }
        rounds.push(Round { number, pairings });

        // Rotate: last element moves to index 1, index 0 stays fixed.
        if let Some(last) = order.pop() {
            order.insert(1, last);
        }
    }

    Ok(rounds)
}
