//! Presentation-neutral timeline and plain-text report.
//!
//! A [`Timeline`] turns a schedule into contiguous run and idle slots
//! covering `[0, makespan)`. Rendering it is left to the caller; the
//! `Display` impls here give a terminal-friendly Gantt chart and a
//! two-decimal metrics summary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{ProcessId, Schedule};
use crate::scheduler::SimulationMetrics;
use crate::simulation::SimulationOutcome;

/// Widest bar drawn for a single slot.
const MAX_CHART_WIDTH: u64 = 60;

/// One contiguous stretch of the CPU timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TimelineSlot {
    /// A process was running.
    Run { id: ProcessId, start: i64, end: i64 },
    /// Nothing was running.
    Idle { start: i64, end: i64 },
}

impl TimelineSlot {
    pub fn start(&self) -> i64 {
        match *self {
            TimelineSlot::Run { start, .. } | TimelineSlot::Idle { start, .. } => start,
        }
    }

    pub fn end(&self) -> i64 {
        match *self {
            TimelineSlot::Run { end, .. } | TimelineSlot::Idle { end, .. } => end,
        }
    }

    pub fn duration(&self) -> i64 {
        self.end().saturating_sub(self.start())
    }

    fn ticks(&self) -> u64 {
        u64::try_from(self.duration()).unwrap_or(0)
    }
}

/// Run and idle slots in time order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub slots: Vec<TimelineSlot>,
}

impl Timeline {
    /// Builds the timeline, inserting idle slots for gaps (including a gap
    /// before the first entry).
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let mut slots = Vec::with_capacity(schedule.len() * 2);
        let mut clock = 0;

        for entry in &schedule.entries {
            if entry.start_time > clock {
                slots.push(TimelineSlot::Idle {
                    start: clock,
                    end: entry.start_time,
                });
            }
            slots.push(TimelineSlot::Run {
                id: entry.id,
                start: entry.start_time,
                end: entry.end_time,
            });
            clock = clock.max(entry.end_time);
        }

        Self { slots }
    }

    /// Total idle ticks.
    pub fn idle_time(&self) -> i64 {
        self.slots
            .iter()
            .filter(|s| matches!(s, TimelineSlot::Idle { .. }))
            .map(TimelineSlot::duration)
            .sum()
    }

    fn ticks_per_cell(&self) -> u64 {
        let longest = self.slots.iter().map(TimelineSlot::ticks).max().unwrap_or(0);
        longest.div_ceil(MAX_CHART_WIDTH).max(1)
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = self.ticks_per_cell();
        for slot in &self.slots {
            let cells = usize::try_from(slot.ticks().div_ceil(scale)).unwrap_or(0);
            let (label, bar) = match slot {
                TimelineSlot::Run { id, .. } => (format!("P{id}"), "#".repeat(cells)),
                TimelineSlot::Idle { .. } => ("idle".to_string(), ".".repeat(cells)),
            };
            writeln!(
                f,
                "[{:>5} - {:>5}] {:<5} {}",
                slot.start(),
                slot.end(),
                label,
                bar
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for SimulationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<6} {:>8} {:>6} {:>8} {:>11}",
            "PID", "Arrival", "Burst", "Waiting", "Turnaround"
        )?;
        for p in &self.processes {
            writeln!(
                f,
                "{:<6} {:>8} {:>6} {:>8} {:>11}",
                format!("P{}", p.id),
                p.arrival_time,
                p.burst_time,
                p.waiting_time,
                p.turnaround_time
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Average Waiting Time:    {:.2}", self.average_waiting_time)?;
        writeln!(f, "Average Turnaround Time: {:.2}", self.average_turnaround_time)?;
        writeln!(f, "Throughput:              {:.2}", self.throughput)?;
        writeln!(f, "CPU Utilization:         {:.2}%", self.cpu_utilization * 100.0)?;
        write!(f, "Context Switches:        {}", self.context_switches)
    }
}

/// Renders the full report for one run: heading, Gantt chart, metrics.
pub fn render(outcome: &SimulationOutcome) -> String {
    format!(
        "{} schedule\n\n{}\n{}\n",
        outcome.algorithm,
        Timeline::from_schedule(&outcome.schedule),
        outcome.metrics
    )
}
