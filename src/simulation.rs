use std::collections::HashSet;

use log::error;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::constants::DEFAULT_GROUP_NAME;
use crate::error::SimulationError;
use crate::match_sim::simulate_match;
use crate::result::{GroupResult, RoundResult};
use crate::schedule::{build_rounds, Round};
use crate::team::Team;

/// Orchestrates a full group simulation: schedule construction, match
/// playback and result assembly.
///
/// The simulator itself is immutable; parameters are fixed at construction
/// so concurrent runs with different settings never interfere.
#[derive(Clone, Debug, Default)]
pub struct GroupSimulator {
    config: SimulationConfig,
}

impl GroupSimulator {
    /// Simulator with the default draw probability and goal factor.
    pub fn new() -> Self {
        GroupSimulator::default()
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        GroupSimulator { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run one full group simulation.
    ///
    /// Validates the team set, builds the round-robin schedule, then plays
    /// every pairing in round order with a single generator. Passing a seed
    /// makes the run reproducible; `None` seeds from entropy.
    ///
    /// # Errors
    /// * [`SimulationError::InvalidInput`] - odd or zero team count,
    ///   duplicate or blank names (raised before any match is played)
    /// * [`SimulationError::SimulationFailed`] - a failure surfaced while
    ///   playing, wrapping the original cause; no partial result is kept
    pub fn simulate<'a>(
        &self,
        teams: &'a [Team],
        seed: Option<u64>,
    ) -> Result<GroupResult<'a>, SimulationError> {
        validate_teams(teams)?;
        let rounds = build_rounds(teams)?;

        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        self.play_rounds(rounds, &mut rng)
    }

    /// Run `count` independent group simulations in parallel.
    ///
    /// A master generator (optionally seeded) draws one sub-seed per run;
    /// each run then plays with its own generator, so no generator instance
    /// is ever shared across threads and a seeded batch is reproducible.
    pub fn run_simulations<'a>(
        &self,
        teams: &'a [Team],
        count: usize,
        seed: Option<u64>,
    ) -> Result<Vec<GroupResult<'a>>, SimulationError> {
        validate_teams(teams)?;

        let mut seed_rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let seeds: Vec<u64> = (0..count).map(|_| seed_rng.gen()).collect();

        seeds
            .par_iter()
            .map(|&run_seed| self.simulate(teams, Some(run_seed)))
            .collect()
    }

    fn play_rounds<'a, R: Rng>(
        &self,
        rounds: Vec<Round<'a>>,
        rng: &mut R,
    ) -> Result<GroupResult<'a>, SimulationError> {
        let mut group = GroupResult::new(DEFAULT_GROUP_NAME);

        for round in rounds {
            let mut round_result = RoundResult::new(round.number);
            for pairing in &round.pairings {
                let result = simulate_match(pairing.home, pairing.away, &self.config, rng)
                    .map_err(|cause| {
                        error!("aborting group simulation: {cause}");
                        SimulationError::SimulationFailed(Box::new(cause))
                    })?;
                round_result.add_match_result(result);
            }
            group.add_round_result(round_result);
        }

        Ok(group)
    }
}

/// Team-set checks the calling layer is expected to have done already, kept
/// here so a malformed set can never start a run.
fn validate_teams(teams: &[Team]) -> Result<(), SimulationError> {
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

    let mut names: HashSet<&str> = HashSet::with_capacity(teams.len());
    for team in teams {
        if team.name.trim().is_empty() {
            return Err(SimulationError::InvalidInput(
                "team name must not be empty".into(),
            ));
        }
        if !names.insert(team.name.as_str()) {
            return Err(SimulationError::InvalidInput(format!(
                "team name '{}' is duplicated",
                team.name
            )));
        }
    }

    Ok(())
}
