//! Built-in dispatching rules.
//!
//! | Rule | Score | Discipline |
//! |------|-------|-----------|
//! | `EarliestArrival` | arrival time | FCFS, Round-Robin queue seeding |
//! | `ShortestBurst` | burst time | SJF |
//! | `HighestPriority` | priority value | Priority |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessRecord;

/// First Come, First Served.
///
/// Prioritizes processes that became eligible earlier.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl DispatchingRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First Come, First Served"
    }
}

/// Shortest Job First.
///
/// Prioritizes processes with the smallest total burst.
/// Minimizes mean waiting time among non-preemptive disciplines.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Static priority.
///
/// Lower priority value = more important, so the value is the score.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest value) First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> SchedulingContext {
        SchedulingContext::at_time(0)
    }

    #[test]
    fn test_earliest_arrival_score() {
        let p = ProcessRecord::new(1, 7, 3);
        assert_eq!(EarliestArrival.evaluate(&p, &ctx()), 7);
        assert_eq!(EarliestArrival.name(), "FCFS");
    }

    #[test]
    fn test_shortest_burst_score() {
        let p = ProcessRecord::new(1, 7, 3);
        assert_eq!(ShortestBurst.evaluate(&p, &ctx()), 3);
    }

    #[test]
    fn test_priority_score() {
        let p = ProcessRecord::new(1, 0, 3).with_priority(4);
        assert_eq!(HighestPriority.evaluate(&p, &ctx()), 4);
        assert_eq!(
            HighestPriority.description(),
            "Highest Priority (lowest value) First"
        );
    }
}
