//! First-Come, First-Served.
//!
//! Processes run to completion in arrival order; equal arrivals keep input
//! order. The CPU idles until the next arrival when the queue drains.

use tracing::trace;

use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::{ProcessRecord, Schedule};

/// Schedules `processes` first-come, first-served.
pub fn fcfs(processes: &[ProcessRecord]) -> Schedule {
    let engine = RuleEngine::new().with_rule(rules::EarliestArrival);
    let order = engine.sort_indices(processes, &SchedulingContext::at_time(0));

    let mut schedule = Schedule::new();
    let mut clock = 0;

    for i in order {
        let p = &processes[i];
        let start = clock.max(p.arrival_time);
        if start > clock {
            trace!(from = clock, to = start, "fcfs: cpu idle");
        }
        let end = p.finish_if_started_at(start);
        schedule.run(p.id, start, end);
        clock = end;
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleEntry;

    #[test]
    fn test_fcfs_in_arrival_order() {
        let ps = ProcessRecord::numbered([(0, 5, 1), (1, 3, 1)]);
        let s = fcfs(&ps);
        assert_eq!(
            s.entries,
            vec![ScheduleEntry::new(1, 0, 5), ScheduleEntry::new(2, 5, 8)]
        );
    }

    #[test]
    fn test_fcfs_sorts_unsorted_input() {
        let ps = ProcessRecord::numbered([(4, 2, 1), (0, 3, 1)]);
        let s = fcfs(&ps);
        assert_eq!(
            s.entries,
            vec![ScheduleEntry::new(2, 0, 3), ScheduleEntry::new(1, 4, 6)]
        );
    }

    #[test]
    fn test_fcfs_equal_arrivals_keep_input_order() {
        let ps = ProcessRecord::numbered([(1, 2, 1), (1, 1, 1), (0, 1, 1)]);
        let ids: Vec<_> = fcfs(&ps).entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_fcfs_idles_until_arrival() {
        let ps = ProcessRecord::numbered([(3, 2, 1)]);
        assert_eq!(fcfs(&ps).entries, vec![ScheduleEntry::new(1, 3, 5)]);
    }

    #[test]
    fn test_fcfs_does_not_touch_input() {
        let ps = ProcessRecord::numbered([(4, 2, 1), (0, 3, 1)]);
        let before = ps.clone();
        let _ = fcfs(&ps);
        assert_eq!(ps, before);
    }
}
