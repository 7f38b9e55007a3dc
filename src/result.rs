use crate::team::Team;

/// One side's share of a simulated match: points awarded plus the two goal
/// tallies. Borrows the caller-owned [`Team`] so identity stays by
/// reference/name rather than by copy.
#[derive(Clone, Debug)]
pub struct TeamResult<'a> {
    pub team: &'a Team,
    pub points: u32,
    pub goals_scored: u32,
    pub goals_allowed: u32,
}

impl<'a> TeamResult<'a> {
    pub fn new(team: &'a Team, points: u32, goals_scored: u32, goals_allowed: u32) -> Self {
        TeamResult {
            team,
            points,
            goals_scored,
            goals_allowed,
        }
    }

    /// Strictly more goals scored than allowed.
    pub fn is_winner(&self) -> bool {
        self.goals_scored > self.goals_allowed
    }
}

/// A simulated match result. `is_draw` is set by the outcome engine's
/// branch and is the source of truth for win/loss/draw classification,
/// not the goal tallies.
#[derive(Clone, Debug)]
pub struct MatchResult<'a> {
    pub home: TeamResult<'a>,
    pub away: TeamResult<'a>,
    pub is_draw: bool,
}

/// Results of all matches in one round, in play order.
#[derive(Clone, Debug)]
pub struct RoundResult<'a> {
    pub number: u32,
    pub matches: Vec<MatchResult<'a>>,
}

impl<'a> RoundResult<'a> {
    /// Round numbers are 1-based.
    pub fn new(number: u32) -> Self {
        debug_assert!(number >= 1);
        RoundResult {
            number,
            matches: Vec::new(),
        }
    }

    pub fn add_match_result(&mut self, result: MatchResult<'a>) {
        self.matches.push(result);
    }
}

/// Results of all rounds in a group, in round order.
#[derive(Clone, Debug)]
pub struct GroupResult<'a> {
    pub name: String,
    pub rounds: Vec<RoundResult<'a>>,
}

impl<'a> GroupResult<'a> {
    pub fn new(name: impl Into<String>) -> Self {
        GroupResult {
            name: name.into(),
            rounds: Vec::new(),
        }
    }

    pub fn add_round_result(&mut self, round: RoundResult<'a>) {
        self.rounds.push(round);
    }

    /// All match results across all rounds, in play order.
    pub fn match_results(&self) -> impl Iterator<Item = &MatchResult<'a>> {
        self.rounds.iter().flat_map(|round| round.matches.iter())
    }
}
