use crate::constants::{DEFAULT_DRAW_PROBABILITY, DEFAULT_GOAL_FACTOR};
use crate::error::SimulationError;

/// Tunable knobs for the match outcome engine.
///
/// A value of this type is passed into each run; simulations running in
/// parallel with different parameters never interfere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Chance that a match ends level, in [0, 1].
    pub draw_probability: f64,

    /// Divisor applied to team strength when bounding goal ranges.
    ///
    /// Lower values (e.g. 10) widen the ranges and produce high-scoring
    /// matches; higher values (e.g. 60) squeeze scores down to defensive,
    /// low-scoring results. Must be non-zero.
    pub goal_factor: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            draw_probability: DEFAULT_DRAW_PROBABILITY,
            goal_factor: DEFAULT_GOAL_FACTOR,
        }
    }
}

impl SimulationConfig {
    /// Replace the draw probability, rejecting values outside [0, 1]
    /// immediately rather than at simulation time.
    pub fn with_draw_probability(mut self, probability: f64) -> Result<Self, SimulationError> {
        validate_draw_probability(probability)?;
        self.draw_probability = probability;
        Ok(self)
    }

    /// Replace the goal factor, rejecting zero immediately rather than at
    /// simulation time.
    pub fn with_goal_factor(mut self, factor: u32) -> Result<Self, SimulationError> {
        validate_goal_factor(factor)?;
        self.goal_factor = factor;
        Ok(self)
    }

    /// Check both knobs. The outcome engine calls this on every match so a
    /// hand-built config cannot smuggle invalid values past the setters.
    pub fn validate(&self) -> Result<(), SimulationError> {
        validate_draw_probability(self.draw_probability)?;
        validate_goal_factor(self.goal_factor)
    }
}

fn validate_draw_probability(probability: f64) -> Result<(), SimulationError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(SimulationError::InvalidConfiguration(format!(
            "draw probability must be between 0.0 and 1.0, got {probability}"
        )));
    }
    Ok(())
}

fn validate_goal_factor(factor: u32) -> Result<(), SimulationError> {
    if factor == 0 {
        return Err(SimulationError::InvalidConfiguration(
            "goal factor must not be zero".into(),
        ));
    }
    Ok(())
}
