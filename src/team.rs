use std::fmt;

use crate::constants::{MAX_STRENGTH, MIN_STRENGTH};
use crate::error::SimulationError;

/// A group-stage participant: a display name plus an abstract strength
/// rating in [1, 100].
///
/// Strength is a single aggregate for now; player-level ratings would feed
/// into it if the model ever grows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub strength: u32,
}

impl Team {
    /// Create a new team.
    ///
    /// Fails with [`SimulationError::InvalidInput`] if the name is blank or
    /// the strength falls outside [1, 100].
    pub fn new(name: impl Into<String>, strength: u32) -> Result<Self, SimulationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SimulationError::InvalidInput(
                "team name must not be empty".into(),
            ));
        }
        if !(MIN_STRENGTH..=MAX_STRENGTH).contains(&strength) {
            return Err(SimulationError::InvalidInput(format!(
                "team strength must be between {MIN_STRENGTH} and {MAX_STRENGTH}, got {strength}"
            )));
        }

        Ok(Team { name, strength })
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_team() {
        let team = Team::new("Team A", 80).unwrap();
        assert_eq!(team.name, "Team A");
        assert_eq!(team.strength, 80);
    }

    #[test]
    fn test_strength_bounds() {
        assert!(Team::new("A", 1).is_ok());
        assert!(Team::new("A", 100).is_ok());
        assert!(matches!(
            Team::new("A", 0),
            Err(SimulationError::InvalidInput(_))
        ));
        assert!(matches!(
            Team::new("A", 101),
            Err(SimulationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(matches!(
            Team::new("", 50),
            Err(SimulationError::InvalidInput(_))
        ));
        assert!(matches!(
            Team::new("   ", 50),
            Err(SimulationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_display() {
        let team = Team::new("Ajax", 72).unwrap();
        assert_eq!(team.to_string(), "Ajax(72)");
    }
}
