//! Process (job) model.
//!
//! A process record is the unit of work handed to a scheduling discipline.
//! It carries everything the four disciplines need: when the process becomes
//! eligible, how much CPU it needs, and how important it is.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//! The caller decides what one tick means.

use serde::{Deserialize, Serialize};

/// Process identifier. Positive and unique within one simulation run.
pub type ProcessId = u32;

/// A process to be scheduled.
///
/// Records are immutable once handed to a strategy; strategies reorder
/// indices or copies, never the caller's slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRecord {
    /// Unique process identifier (1-based, assigned by input order).
    pub id: ProcessId,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
}

impl ProcessRecord {
    /// Creates a process with priority 1.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 1,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Builds records from `(arrival, burst, priority)` triples, assigning
    /// ids `1..=n` in input order.
    pub fn numbered<I>(inputs: I) -> Vec<Self>
    where
        I: IntoIterator<Item = (i64, i64, i32)>,
    {
        inputs
            .into_iter()
            .zip(1..)
            .map(|((arrival, burst, priority), id)| {
                Self::new(id, arrival, burst).with_priority(priority)
            })
            .collect()
    }

    /// Tick at which the process would finish if started at `start`.
    ///
    /// Saturates at `i64::MAX`; input that passes `validate_processes`
    /// never reaches it.
    #[inline]
    pub fn finish_if_started_at(&self, start: i64) -> i64 {
        start.saturating_add(self.burst_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = ProcessRecord::new(3, 4, 7).with_priority(2);
        assert_eq!(p.id, 3);
        assert_eq!(p.arrival_time, 4);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 2);
        assert_eq!(p.finish_if_started_at(10), 17);
        assert_eq!(p.finish_if_started_at(i64::MAX - 1), i64::MAX);
    }

    #[test]
    fn test_numbered_assigns_input_order_ids() {
        let ps = ProcessRecord::numbered([(5, 2, 1), (0, 1, 3), (2, 4, 2)]);
        let ids: Vec<_> = ps.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(ps[1].arrival_time, 0);
        assert_eq!(ps[1].priority, 3);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let p = ProcessRecord::new(1, 0, 5);
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(json["arrivalTime"], 0);
        assert_eq!(json["burstTime"], 5);

        let back: ProcessRecord =
            serde_json::from_str(r#"{"id":2,"arrivalTime":1,"burstTime":3,"priority":4}"#)
                .unwrap();
        assert_eq!(back, ProcessRecord::new(2, 1, 3).with_priority(4));
    }
}
