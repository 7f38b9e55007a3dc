//! Groupsim Core - round-robin group-stage simulation library.
//!
//! This library builds a balanced round-robin schedule for an even set of
//! teams, simulates every match with a weighted random outcome model, and
//! folds the results into a standings table.

pub mod config;
pub mod constants;
pub mod error;
pub mod match_sim;
pub mod result;
pub mod schedule;
pub mod simulation;
pub mod standings;
pub mod team;

pub use config::SimulationConfig;
pub use constants::{
    DEFAULT_DRAW_PROBABILITY, DEFAULT_GOAL_FACTOR, DEFAULT_GROUP_NAME, DRAW_POINTS, WIN_POINTS,
};
pub use error::SimulationError;
pub use match_sim::{simulate_match, win_probabilities};
pub use result::{GroupResult, MatchResult, RoundResult, TeamResult};
pub use schedule::{build_rounds, Pairing, Round};
pub use simulation::GroupSimulator;
pub use standings::{standings, StandingsRow};
pub use team::Team;
