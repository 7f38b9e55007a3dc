use log::info;
use rand::Rng;

use crate::config::SimulationConfig;
use crate::constants::{DRAW_POINTS, LOSE_GOAL_BUFFER, WIN_GOAL_BUFFER, WIN_POINTS};
use crate::error::SimulationError;
use crate::result::{MatchResult, TeamResult};
use crate::team::Team;

/// Win probabilities for the two sides of a pairing.
///
/// Each side's share of the combined strength, scaled down by the draw
/// probability so that home win + away win + draw sum to 1.
///
/// # Returns
/// `(home_win_prob, away_win_prob)`; the remaining mass is the draw.
pub fn win_probabilities(home: &Team, away: &Team, draw_probability: f64) -> (f64, f64) {
    let total_strength = (home.strength + away.strength) as f64;

    let home_share = home.strength as f64 / total_strength;
    let away_share = away.strength as f64 / total_strength;

    (
        home_share * (1.0 - draw_probability),
        away_share * (1.0 - draw_probability),
    )
}

/// Simulate a single match between two teams.
///
/// Rolls one uniform value to pick home win / away win / draw, then draws
/// goal tallies from ranges bounded by each side's strength divided by the
/// goal factor (truncating division keeps the goal bands coarse). The
/// winner's range gets a +2 buffer for livelier scores; the loser is capped
/// by both its own ratio (+1) and the winner's tally, so a decisive winner
/// always scores strictly more.
///
/// # Arguments
/// * `home`, `away` - The pairing to play
/// * `config` - Draw probability and goal factor
/// * `rng` - Random source; inject a seeded generator for reproducible runs
///
/// # Errors
/// [`SimulationError::InvalidConfiguration`] if the config's draw
/// probability is outside [0, 1] or its goal factor is zero.
pub fn simulate_match<'a, R: Rng>(
    home: &'a Team,
    away: &'a Team,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<MatchResult<'a>, SimulationError> {
    config.validate()?;

    let (home_win_prob, away_win_prob) = win_probabilities(home, away, config.draw_probability);

    // Strength/factor ratios anchor the goal ranges.
    let home_ratio = home.strength / config.goal_factor;
    let away_ratio = away.strength / config.goal_factor;

    let outcome = rng.gen::<f64>();

    let (home_goals, away_goals, home_points, away_points, is_draw) = if outcome < home_win_prob {
        let winner_goals = rng.gen_range(1..home_ratio + WIN_GOAL_BUFFER);
        let loser_goals = rng.gen_range(0..winner_goals.min(away_ratio + LOSE_GOAL_BUFFER));
        (winner_goals, loser_goals, WIN_POINTS, 0, false)
    } else if outcome < home_win_prob + away_win_prob {
        let winner_goals = rng.gen_range(1..away_ratio + WIN_GOAL_BUFFER);
        let loser_goals = rng.gen_range(0..winner_goals.min(home_ratio + LOSE_GOAL_BUFFER));
        (loser_goals, winner_goals, 0, WIN_POINTS, false)
    } else {
        // Draw scores lean on the weaker side's strength.
        let goals = rng.gen_range(0..home.strength.min(away.strength) / config.goal_factor + WIN_GOAL_BUFFER);
        (goals, goals, DRAW_POINTS, DRAW_POINTS, true)
    };

    info!(
        "simulator: {} vs {} - result {home_goals}:{away_goals}",
        home.name, away.name
    );

    Ok(MatchResult {
        home: TeamResult::new(home, home_points, home_goals, away_goals),
        away: TeamResult::new(away, away_points, away_goals, home_goals),
        is_draw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pairing() -> (Team, Team) {
        (
            Team::new("Home", 80).unwrap(),
            Team::new("Away", 60).unwrap(),
        )
    }

    #[test]
    fn test_win_probabilities_sum_with_draw_mass() {
        let (home, away) = pairing();
        let (p_home, p_away) = win_probabilities(&home, &away, 0.25);

        assert!((p_home + p_away + 0.25 - 1.0).abs() < 1e-10);
        assert!(p_home > p_away, "stronger side must be favored");
    }

    #[test]
    fn test_zero_draw_probability_keeps_raw_shares() {
        let (home, away) = pairing();
        let (p_home, p_away) = win_probabilities(&home, &away, 0.0);

        assert!((p_home - 80.0 / 140.0).abs() < 1e-10);
        assert!((p_away - 60.0 / 140.0).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let (home, away) = pairing();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let bad_draw = SimulationConfig {
            draw_probability: 1.5,
            goal_factor: 30,
        };
        assert!(matches!(
            simulate_match(&home, &away, &bad_draw, &mut rng),
            Err(SimulationError::InvalidConfiguration(_))
        ));

        let zero_factor = SimulationConfig {
            draw_probability: 0.25,
            goal_factor: 0,
        };
        assert!(matches!(
            simulate_match(&home, &away, &zero_factor, &mut rng),
            Err(SimulationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_decisive_results_award_three_points_and_strict_margin() {
        let (home, away) = pairing();
        let config = SimulationConfig::default().with_draw_probability(0.0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..1000 {
            let result = simulate_match(&home, &away, &config, &mut rng).unwrap();
            assert!(!result.is_draw);
            assert_eq!(result.home.points + result.away.points, 3);

            let (winner, loser) = if result.home.is_winner() {
                (&result.home, &result.away)
            } else {
                (&result.away, &result.home)
            };
            assert!(winner.goals_scored > loser.goals_scored);
            assert_eq!(winner.points, 3);
            assert_eq!(loser.points, 0);
            assert_eq!(winner.goals_allowed, loser.goals_scored);
            assert_eq!(loser.goals_allowed, winner.goals_scored);
        }
    }

    #[test]
    fn test_forced_draws_split_points_and_goals() {
        let (home, away) = pairing();
        let config = SimulationConfig::default().with_draw_probability(1.0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..1000 {
            let result = simulate_match(&home, &away, &config, &mut rng).unwrap();
            assert!(result.is_draw);
            assert_eq!(result.home.points, 1);
            assert_eq!(result.away.points, 1);
            assert_eq!(result.home.goals_scored, result.away.goals_scored);
        }
    }

    #[test]
    fn test_draw_rate_tracks_configured_probability() {
        let home = Team::new("Home", 80).unwrap();
        let away = Team::new("Away", 60).unwrap();
        let config = SimulationConfig::default().with_draw_probability(0.8).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2024);

        let draws = (0..1000)
            .filter(|_| {
                simulate_match(&home, &away, &config, &mut rng)
                    .unwrap()
                    .is_draw
            })
            .count();

        let rate = draws as f64 / 1000.0;
        assert!(
            (0.75..=0.85).contains(&rate),
            "observed draw rate {rate} outside [0.75, 0.85]"
        );
    }

    #[test]
    fn test_goal_factor_bounds_scores() {
        let home = Team::new("Home", 90).unwrap();
        let away = Team::new("Away", 90).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        // factor 30 -> ratio 3 -> winner draws from [1, 5)
        let tight = SimulationConfig::default().with_goal_factor(30).unwrap();
        for _ in 0..500 {
            let result = simulate_match(&home, &away, &tight, &mut rng).unwrap();
            assert!(result.home.goals_scored < 5);
            assert!(result.away.goals_scored < 5);
        }

        // factor 100 -> ratio 0 -> winner always scores exactly 1, loser 0
        let defensive = SimulationConfig::default()
            .with_draw_probability(0.0)
            .unwrap()
            .with_goal_factor(100)
            .unwrap();
        for _ in 0..100 {
            let result = simulate_match(&home, &away, &defensive, &mut rng).unwrap();
            let goals = result.home.goals_scored + result.away.goals_scored;
            assert_eq!(goals, 1);
        }
    }
}
