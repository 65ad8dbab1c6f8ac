//! Input validation for simulation runs.
//!
//! Checks the process records before any discipline runs. Detects:
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive priorities
//! - Zero or duplicate IDs
//! - Timelines that cannot be represented in `i64`
//!
//! All issues are collected so the caller can report them at once.

use crate::models::ProcessRecord;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Arrival time below zero.
    NegativeArrival,
    /// Burst time of zero or less.
    NonPositiveBurst,
    /// Priority of zero or less.
    NonPositivePriority,
    /// Process ID of zero.
    InvalidId,
    /// Two processes share the same ID.
    DuplicateId,
    /// Latest arrival plus total burst exceeds `i64::MAX`.
    TimelineOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the process records for a simulation run.
///
/// Checks:
/// 1. Every ID is positive
/// 2. No duplicate IDs
/// 3. `arrival_time >= 0`
/// 4. `burst_time >= 1`
/// 5. `priority >= 1`
/// 6. `max(arrival_time) + sum(burst_time)` fits in `i64`
///
/// Check 6 bounds every clock value a discipline can reach, so runs over
/// validated input never overflow.
///
/// An empty slice passes; the orchestrator reports it separately.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessRecord]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Process ID must be positive, got 0",
            ));
        } else if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }

        if p.priority < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositivePriority,
                format!("Process {} has non-positive priority {}", p.id, p.priority),
            ));
        }
    }

    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimelineOverflow,
            format!("Latest arrival {latest_arrival} plus total burst time overflows i64"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
