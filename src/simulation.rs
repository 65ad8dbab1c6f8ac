//! Simulation orchestrator.
//!
//! Validates a run's inputs, dispatches to the selected discipline, and
//! computes metrics over the resulting schedule. Each call owns all of its
//! working state, so independent calls never interfere.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{SimResult, SimulationError};
use crate::models::{ProcessRecord, Schedule};
use crate::scheduler::{Algorithm, SimulationMetrics};
use crate::validation::validate_processes;

/// Result of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Discipline that produced the schedule.
    pub algorithm: Algorithm,
    pub schedule: Schedule,
    pub metrics: SimulationMetrics,
}

/// A simulation run described as data (e.g. decoded from JSON).
///
/// ```
/// use cpu_sched_sim::SimulationRequest;
///
/// let request = SimulationRequest::from_json(r#"{
///     "processes": [
///         {"id": 1, "arrivalTime": 0, "burstTime": 4, "priority": 1},
///         {"id": 2, "arrivalTime": 1, "burstTime": 2, "priority": 1}
///     ],
///     "algorithm": "RR",
///     "quantum": 2
/// }"#).unwrap();
///
/// let outcome = request.run().unwrap();
/// assert_eq!(outcome.schedule.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub processes: Vec<ProcessRecord>,
    /// Algorithm identifier ("FCFS", "SJF", "RR", "Priority").
    pub algorithm: String,
    /// Time quantum, required for Round-Robin only.
    #[serde(default)]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request.
    pub fn new(processes: Vec<ProcessRecord>, algorithm: impl Into<String>) -> Self {
        Self {
            processes,
            algorithm: algorithm.into(),
            quantum: None,
        }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Decodes a request from JSON.
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Runs the request. The algorithm identifier is resolved before any
    /// other work.
    pub fn run(&self) -> SimResult<SimulationOutcome> {
        let algorithm: Algorithm = self.algorithm.parse()?;
        simulate(&self.processes, algorithm, self.quantum)
    }
}

/// Runs one simulation.
///
/// # Errors
/// - `EmptySchedule` if `processes` is empty
/// - `InvalidProcessInput` listing every malformed record
/// - `InvalidConfiguration` if Round-Robin lacks a positive quantum
pub fn simulate(
    processes: &[ProcessRecord],
    algorithm: Algorithm,
    quantum: Option<i64>,
) -> SimResult<SimulationOutcome> {
    if processes.is_empty() {
        warn!(%algorithm, "simulation requested with no processes");
        return Err(SimulationError::EmptySchedule);
    }

    if let Err(errors) = validate_processes(processes) {
        warn!(%algorithm, issues = errors.len(), "rejected process input");
        return Err(SimulationError::InvalidProcessInput(errors));
    }

    debug!(%algorithm, processes = processes.len(), ?quantum, "dispatching");
    let schedule = algorithm.schedule(processes, quantum)?;
    let metrics = SimulationMetrics::calculate(&schedule, processes)?;

    info!(
        %algorithm,
        entries = schedule.len(),
        makespan = metrics.makespan,
        avg_waiting = metrics.average_waiting_time,
        avg_turnaround = metrics.average_turnaround_time,
        throughput = metrics.throughput,
        "simulation complete"
    );

    Ok(SimulationOutcome {
        algorithm,
        schedule,
        metrics,
    })
}

/// Runs one simulation with the algorithm given by identifier.
///
/// # Errors
/// `UnknownAlgorithm` for an unrecognized identifier, otherwise as
/// [`simulate`].
pub fn simulate_named(
    processes: &[ProcessRecord],
    algorithm: &str,
    quantum: Option<i64>,
) -> SimResult<SimulationOutcome> {
    simulate(processes, algorithm.parse()?, quantum)
}
