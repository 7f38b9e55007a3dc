use crate::result::{GroupResult, TeamResult};
use crate::team::Team;

/// Accumulated group-stage record for one team.
#[derive(Clone, Debug)]
pub struct StandingsRow<'a> {
    pub team: &'a Team,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_diff: i32,
    pub points: u32,
}

impl<'a> StandingsRow<'a> {
    fn new(team: &'a Team) -> Self {
        StandingsRow {
            team,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_diff: 0,
            points: 0,
        }
    }

    fn record(&mut self, result: &TeamResult<'a>, is_draw: bool) {
        self.played += 1;
        if is_draw {
            self.draws += 1;
        } else if result.is_winner() {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.goals_for += result.goals_scored;
        self.goals_against += result.goals_allowed;
        self.goal_diff += result.goals_scored as i32 - result.goals_allowed as i32;
        self.points += result.points;
    }
}

/// Fold a completed group result into a standings table.
///
/// Pure and deterministic: every match contributes both sides' records,
/// classification goes by the match's explicit draw flag, and the final
/// table is ordered by points descending. The sort is stable, so teams
/// level on points keep their first-appearance order.
pub fn standings<'a>(group: &GroupResult<'a>) -> Vec<StandingsRow<'a>> {
    let mut rows: Vec<StandingsRow<'a>> = Vec::new();

    for result in group.match_results() {
        for side in [&result.home, &result.away] {
            let row = match rows
                .iter()
                .position(|row| row.team.name == side.team.name)
            {
                Some(index) => &mut rows[index],
                None => {
                    rows.push(StandingsRow::new(side.team));
                    rows.last_mut().expect("row was just pushed")
                }
            };
            row.record(side, result.is_draw);
        }
    }

    rows.sort_by(|a, b| b.points.cmp(&a.points));
    rows
}
