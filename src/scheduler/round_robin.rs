//! Round-Robin, preemptive.
//!
//! # Algorithm
//!
//! 1. Load every process into the ready queue once, in arrival order
//!    (equal arrivals keep input order).
//! 2. Dequeue the head and run it for `min(remaining, quantum)` ticks.
//! 3. If work remains, push it to the tail.
//!
//! The queue is never re-sorted and arrivals are not re-checked between
//! slices: queue position alone decides who runs next. Every slice starts at
//! the current clock, so a head process whose arrival lies ahead of the clock
//! is dispatched before it arrives and the CPU never idles.

use std::collections::VecDeque;

use tracing::trace;

use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::error::{SimResult, SimulationError};
use crate::models::{ProcessRecord, Schedule};

/// Schedules `processes` round-robin with the given time quantum.
///
/// # Errors
/// `InvalidConfiguration` if `quantum < 1`.
pub fn round_robin(processes: &[ProcessRecord], quantum: i64) -> SimResult<Schedule> {
    if quantum < 1 {
        return Err(SimulationError::InvalidConfiguration(format!(
            "Round-Robin quantum must be at least 1, got {quantum}"
        )));
    }

    let engine = RuleEngine::new().with_rule(rules::EarliestArrival);
    let mut queue: VecDeque<usize> = engine
        .sort_indices(processes, &SchedulingContext::at_time(0))
        .into();
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();

    let mut schedule = Schedule::new();
    let mut clock: i64 = 0;

    while let Some(i) = queue.pop_front() {
        if remaining[i] <= 0 {
            continue;
        }

        let p = &processes[i];
        let start = clock;
        let slice = remaining[i].min(quantum);
        let end = start.saturating_add(slice);

        schedule.run(p.id, start, end);
        clock = end;
        remaining[i] -= slice;

        if remaining[i] > 0 {
            trace!(id = p.id, at = end, left = remaining[i], "quantum expired, requeued");
            queue.push_back(i);
        }
    }

    Ok(schedule)
}
