//! Simulation error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Simulation operation result.
pub type SimResult<T> = Result<T, SimulationError>;

/// Failures surfaced by a simulation run.
///
/// Every variant is detected before or immediately after strategy
/// execution; none leave a partially computed result behind.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid process input: {}", join_messages(.0))]
    InvalidProcessInput(Vec<ValidationError>),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unknown algorithm: {0:?} (expected one of FCFS, SJF, RR, Priority)")]
    UnknownAlgorithm(String),

    #[error("Empty schedule: no process was scheduled")]
    EmptySchedule,

    #[error("Malformed simulation request: {0}")]
    MalformedRequest(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_lists_every_issue() {
        let err = SimulationError::InvalidProcessInput(vec![
            ValidationError::new(ValidationErrorKind::NegativeArrival, "P1 arrives at -1"),
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "P2 has burst 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid process input: P1 arrives at -1; P2 has burst 0"
        );
    }

    #[test]
    fn test_unknown_algorithm_message() {
        let err = SimulationError::UnknownAlgorithm("LIFO".into());
        assert!(err.to_string().contains("\"LIFO\""));
    }
}
