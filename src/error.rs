use thiserror::Error;

/// Errors produced while building or running a group simulation.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The team set handed to the simulator is unusable: odd or zero count,
    /// a duplicated name, or an empty name.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A simulation parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A failure surfaced while a run was already in progress. The run is
    /// abandoned; no partial group result is ever returned.
    #[error("group simulation failed: {0}")]
    SimulationFailed(#[source] Box<SimulationError>),
}

impl SimulationError {
    /// Innermost cause of a wrapped failure.
    pub fn root_cause(&self) -> &SimulationError {
        match self {
            SimulationError::SimulationFailed(cause) => cause.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_cause() {
        let inner = SimulationError::InvalidConfiguration("goal factor must not be zero".into());
        let wrapped = SimulationError::SimulationFailed(Box::new(inner));

        let message = wrapped.to_string();
        assert!(message.contains("group simulation failed"));
        assert!(message.contains("goal factor must not be zero"));
    }

    #[test]
    fn test_root_cause_unwraps_nesting() {
        let inner = SimulationError::InvalidInput("team count must be even".into());
        let wrapped = SimulationError::SimulationFailed(Box::new(inner));

        assert!(matches!(
            wrapped.root_cause(),
            SimulationError::InvalidInput(_)
        ));
    }
}
