//! Non-preemptive greedy disciplines (SJF, Priority).
//!
//! # Algorithm
//!
//! 1. At each decision point, the candidates are the unscheduled processes
//!    that have arrived (`arrival_time <= clock`).
//! 2. If there are none, jump the clock to the earliest remaining arrival.
//!    No entry is emitted for the idle gap.
//! 3. Otherwise the rule engine picks one; it runs to completion.
//!
//! Both disciplines break ties on arrival time, then on input order.
//!
//! # Complexity
//! O(n²) rule evaluations for n processes.

use tracing::trace;

use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::{ProcessRecord, Schedule};

/// Shortest-Job-First, non-preemptive.
pub fn sjf(processes: &[ProcessRecord]) -> Schedule {
    let engine = RuleEngine::new()
        .with_rule(rules::ShortestBurst)
        .with_tie_breaker(rules::EarliestArrival);
    run_to_completion(processes, &engine)
}

/// Priority scheduling, non-preemptive. Lower `priority` runs first.
pub fn priority(processes: &[ProcessRecord]) -> Schedule {
    let engine = RuleEngine::new()
        .with_rule(rules::HighestPriority)
        .with_tie_breaker(rules::EarliestArrival);
    run_to_completion(processes, &engine)
}

/// Runs the decision-point loop with `engine` choosing among ready processes.
pub fn run_to_completion(processes: &[ProcessRecord], engine: &RuleEngine) -> Schedule {
    let mut schedule = Schedule::new();
    // Input order, so the engine's stable tie-break falls back to it.
    let mut pending: Vec<usize> = (0..processes.len()).collect();
    let mut clock = 0;

    while !pending.is_empty() {
        let context = SchedulingContext::at_time(clock);

        match engine.select_ready(processes, &pending, &context) {
            Some(i) => {
                let p = &processes[i];
                let end = p.finish_if_started_at(clock);
                schedule.run(p.id, clock, end);
                clock = end;
                pending.retain(|&j| j != i);
            }
            None => {
                let Some(next) = pending.iter().map(|&j| processes[j].arrival_time).min() else {
                    break;
                };
                trace!(from = clock, to = next, "no ready process, cpu idle");
                clock = next;
            }
        }
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleEntry;

    fn ids(schedule: &Schedule) -> Vec<u32> {
        schedule.entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_sjf_idle_gap() {
        let ps = ProcessRecord::numbered([(5, 2, 1), (0, 1, 1)]);
        let s = sjf(&ps);
        assert_eq!(
            s.entries,
            vec![ScheduleEntry::new(2, 0, 1), ScheduleEntry::new(1, 5, 7)]
        );
    }

    #[test]
    fn test_sjf_picks_shortest_ready() {
        // P1 runs first (only one ready at 0); then P3 (burst 1) beats P2 (burst 4)
        let ps = ProcessRecord::numbered([(0, 3, 1), (1, 4, 1), (2, 1, 1)]);
        let s = sjf(&ps);
        assert_eq!(
            s.entries,
            vec![
                ScheduleEntry::new(1, 0, 3),
                ScheduleEntry::new(3, 3, 4),
                ScheduleEntry::new(2, 4, 8),
            ]
        );
    }

    #[test]
    fn test_sjf_is_non_preemptive() {
        // P2 is shorter but arrives while P1 runs
        let ps = ProcessRecord::numbered([(0, 10, 1), (1, 1, 1)]);
        assert_eq!(ids(&sjf(&ps)), vec![1, 2]);
    }

    #[test]
    fn test_sjf_equal_burst_prefers_earlier_arrival() {
        let ps = ProcessRecord::numbered([(0, 6, 1), (3, 2, 1), (1, 2, 1)]);
        assert_eq!(ids(&sjf(&ps)), vec![1, 3, 2]);
    }

    #[test]
    fn test_sjf_full_tie_keeps_input_order() {
        let ps = ProcessRecord::numbered([(0, 2, 1), (0, 2, 1), (0, 2, 1)]);
        assert_eq!(ids(&sjf(&ps)), vec![1, 2, 3]);
    }

    #[test]
    fn test_priority_lowest_value_first() {
        let ps = ProcessRecord::numbered([(0, 2, 3), (0, 2, 1), (0, 2, 2)]);
        let s = priority(&ps);
        assert_eq!(ids(&s), vec![2, 3, 1]);
        assert_eq!(s.makespan(), 6);
    }

    #[test]
    fn test_priority_tie_keeps_input_order() {
        let ps = ProcessRecord::numbered([(0, 4, 2), (0, 1, 2), (0, 3, 2)]);
        assert_eq!(ids(&priority(&ps)), vec![1, 2, 3]);
    }

    #[test]
    fn test_priority_waits_for_arrival() {
        // P2 has the better priority but only P1 is ready at t=0
        let ps = ProcessRecord::numbered([(0, 3, 5), (1, 2, 1), (1, 2, 3)]);
        let s = priority(&ps);
        assert_eq!(
            s.entries,
            vec![
                ScheduleEntry::new(1, 0, 3),
                ScheduleEntry::new(2, 3, 5),
                ScheduleEntry::new(3, 5, 7),
            ]
        );
    }

    #[test]
    fn test_priority_idle_then_dispatch() {
        let ps = ProcessRecord::numbered([(10, 1, 2), (10, 1, 1)]);
        let s = priority(&ps);
        assert_eq!(
            s.entries,
            vec![ScheduleEntry::new(2, 10, 11), ScheduleEntry::new(1, 11, 12)]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(sjf(&[]).is_empty());
        assert!(priority(&[]).is_empty());
    }
}
