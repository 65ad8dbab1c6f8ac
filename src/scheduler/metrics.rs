//! Simulation performance metrics.
//!
//! Computes per-process and aggregate figures from a completed schedule
//! and its input processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Waiting time | first start - arrival |
//! | Turnaround time | completion - arrival |
//! | Ready time | turnaround - burst |
//! | Throughput | completed processes / makespan |
//! | CPU utilization | busy time / makespan |
//!
//! Averages are unweighted means over the processes that appear in the
//! schedule. Entries naming unknown processes are ignored. Round-Robin may
//! dispatch a process before its arrival, so its waiting time can be negative.

use serde::{Deserialize, Serialize};

use crate::error::{SimResult, SimulationError};
use crate::models::{ProcessId, ProcessRecord, Schedule};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Figures for one process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMetrics {
    pub id: ProcessId,
    pub arrival_time: i64,
    pub burst_time: i64,
    /// Start of the first burst.
    pub first_start: i64,
    /// End of the last burst.
    pub completion_time: i64,
    /// `first_start - arrival_time`.
    pub waiting_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// Total time ready but not running: `turnaround_time - burst_time`.
    pub ready_time: i64,
}

/// Aggregate figures for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationMetrics {
    /// Per-process figures, in input order.
    pub processes: Vec<ProcessMetrics>,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// End time of the final schedule entry.
    pub makespan: i64,
    /// Busy fraction of `[0, makespan)` (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Ticks within `[0, makespan)` with nothing running.
    pub idle_time: i64,
    pub context_switches: usize,
}

impl SimulationMetrics {
    /// Computes metrics from a schedule and its input processes.
    ///
    /// # Errors
    /// - `EmptySchedule` if no input process appears in the schedule or the
    ///   makespan is zero.
    /// - `InvalidProcessInput` (`TimelineOverflow`) if a per-process
    ///   difference does not fit in `i64`.
    pub fn calculate(schedule: &Schedule, processes: &[ProcessRecord]) -> SimResult<Self> {
        let makespan = schedule.makespan();
        if schedule.is_empty() || makespan <= 0 {
            return Err(SimulationError::EmptySchedule);
        }

        let per_process = processes
            .iter()
            .filter_map(|p| {
                let first_start = schedule.first_start(p.id)?;
                let completion_time = schedule.completion_time(p.id)?;
                Some(process_metrics(p, first_start, completion_time))
            })
            .collect::<SimResult<Vec<_>>>()?;

        if per_process.is_empty() {
            return Err(SimulationError::EmptySchedule);
        }

        let count = per_process.len() as f64;
        let total_waiting: i128 = per_process.iter().map(|m| i128::from(m.waiting_time)).sum();
        let total_turnaround: i128 = per_process
            .iter()
            .map(|m| i128::from(m.turnaround_time))
            .sum();
        let busy = schedule.busy_time();

        Ok(Self {
            average_waiting_time: total_waiting as f64 / count,
            average_turnaround_time: total_turnaround as f64 / count,
            throughput: count / makespan as f64,
            makespan,
            cpu_utilization: busy as f64 / makespan as f64,
            idle_time: makespan.saturating_sub(busy),
            context_switches: schedule.context_switches(),
            processes: per_process,
        })
    }

    /// Figures for one process.
    pub fn for_process(&self, id: ProcessId) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.id == id)
    }

    /// Number of processes the averages are taken over.
    pub fn completed(&self) -> usize {
        self.processes.len()
    }
}

fn process_metrics(
    p: &ProcessRecord,
    first_start: i64,
    completion_time: i64,
) -> SimResult<ProcessMetrics> {
    let overflow = || {
        SimulationError::InvalidProcessInput(vec![ValidationError::new(
            ValidationErrorKind::TimelineOverflow,
            format!("Metrics for process {} overflow i64", p.id),
        )])
    };
    let waiting_time = first_start.checked_sub(p.arrival_time).ok_or_else(overflow)?;
    let turnaround_time = completion_time
        .checked_sub(p.arrival_time)
        .ok_or_else(overflow)?;
    let ready_time = turnaround_time
        .checked_sub(p.burst_time)
        .ok_or_else(overflow)?;

    Ok(ProcessMetrics {
        id: p.id,
        arrival_time: p.arrival_time,
        burst_time: p.burst_time,
        first_start,
        completion_time,
        waiting_time,
        turnaround_time,
        ready_time,
    })
}
