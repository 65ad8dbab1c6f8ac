//! Scheduling disciplines and performance metrics.
//!
//! Each discipline is a pure function from process records to a
//! [`Schedule`]. [`Algorithm`] is the closed set of disciplines and
//! dispatches to them exhaustively.
//!
//! | Discipline | Preemptive | Selection |
//! |------------|-----------|-----------|
//! | FCFS | no | arrival order |
//! | SJF | no | shortest burst among arrived |
//! | RR | yes | fixed ready queue, time quantum |
//! | Priority | no | lowest priority value among arrived |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod fcfs;
mod greedy;
mod metrics;
mod round_robin;

pub use fcfs::fcfs;
pub use greedy::{priority, run_to_completion, sjf};
pub use metrics::{ProcessMetrics, SimulationMetrics};
pub use round_robin::round_robin;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SimResult, SimulationError};
use crate::models::{ProcessRecord, Schedule};

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come, First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    #[serde(rename = "SJF")]
    Sjf,
    /// Round-Robin with a time quantum.
    #[serde(rename = "RR")]
    RoundRobin,
    /// Static priority, non-preemptive.
    #[serde(rename = "Priority")]
    Priority,
}

impl Algorithm {
    /// Every discipline, in display order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
    ];

    /// Canonical identifier ("FCFS", "SJF", "RR", "Priority").
    pub fn identifier(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::RoundRobin => "RR",
            Algorithm::Priority => "Priority",
        }
    }

    /// Whether a running process can be suspended.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }

    /// Whether a time quantum must be supplied.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }

    /// Runs the discipline over `processes`.
    ///
    /// `quantum` is only consulted by Round-Robin.
    ///
    /// # Errors
    /// `InvalidConfiguration` if Round-Robin gets no quantum or one below 1.
    pub fn schedule(&self, processes: &[ProcessRecord], quantum: Option<i64>) -> SimResult<Schedule> {
        match self {
            Algorithm::Fcfs => Ok(fcfs(processes)),
            Algorithm::Sjf => Ok(sjf(processes)),
            Algorithm::Priority => Ok(priority(processes)),
            Algorithm::RoundRobin => {
                let quantum = quantum.ok_or_else(|| {
                    SimulationError::InvalidConfiguration(
                        "Round-Robin requires a time quantum".into(),
                    )
                })?;
                round_robin(processes, quantum)
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "rr" | "round-robin" => Ok(Algorithm::RoundRobin),
            "priority" => Ok(Algorithm::Priority),
            _ => Err(SimulationError::UnknownAlgorithm(s.to_string())),
        }
    }
}
