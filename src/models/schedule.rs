//! Schedule (solution) model.
//!
//! A schedule is the ordered list of CPU bursts produced by one scheduling
//! discipline. Preemptive disciplines emit several entries per process;
//! non-preemptive disciplines emit exactly one.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{ProcessId, ProcessRecord};

/// One contiguous execution burst on the single CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Process that ran.
    pub id: ProcessId,
    /// First tick of the burst.
    pub start_time: i64,
    /// Tick at which the burst ended (exclusive).
    pub end_time: i64,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(id: ProcessId, start_time: i64, end_time: i64) -> Self {
        Self {
            id,
            start_time,
            end_time,
        }
    }

    /// Burst length (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// An ordered execution timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Entries in dispatch order (non-decreasing start time).
    pub entries: Vec<ScheduleEntry>,
}

/// A broken schedule invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Process involved, when the violation concerns one.
    pub process_id: Option<ProcessId>,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule invariant violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationType {
    /// An entry starts before the previous one.
    OutOfOrder,
    /// An entry starts before the previous one ended.
    Overlap,
    /// An entry with `end_time <= start_time`.
    EmptyBurst,
    /// Total CPU time given to a process differs from its burst time.
    BurstMismatch,
    /// An entry references a process that is not in the input.
    UnknownProcess,
}

impl Violation {
    fn new(
        violation_type: ViolationType,
        process_id: Option<ProcessId>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            process_id,
            message: message.into(),
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Appends a burst of `id` over `[start, end)`.
    pub fn run(&mut self, id: ProcessId, start: i64, end: i64) {
        self.push(ScheduleEntry::new(id, start, end));
    }

    /// Whether no entries were produced.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Makespan: end time of the final entry, 0 when empty.
    pub fn makespan(&self) -> i64 {
        self.entries.last().map(|e| e.end_time).unwrap_or(0)
    }

    /// Returns all entries for a given process, in dispatch order.
    pub fn entries_for(&self, id: ProcessId) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.id == id).collect()
    }

    /// Start of the first burst for a process.
    pub fn first_start(&self, id: ProcessId) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.start_time)
    }

    /// Completion time for a process (end of its last burst).
    pub fn completion_time(&self, id: ProcessId) -> Option<i64> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.id == id)
            .map(|e| e.end_time)
    }

    /// Total ticks the CPU spent running anything.
    pub fn busy_time(&self) -> i64 {
        self.entries
            .iter()
            .fold(0i64, |acc, e| acc.saturating_add(e.duration()))
    }

    /// Ticks within `[0, makespan)` with nothing running.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Number of distinct processes that ran.
    pub fn process_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.id)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Number of adjacent entry pairs that switch to a different process.
    pub fn context_switches(&self) -> usize {
        self.entries
            .windows(2)
            .filter(|pair| pair[0].id != pair[1].id)
            .count()
    }

    /// Checks the single-CPU invariants against the input processes.
    ///
    /// Checks:
    /// 1. Entries are ordered by non-decreasing start time
    /// 2. No entry starts before its predecessor ended
    /// 3. Every entry has positive length
    /// 4. Every entry references a known process
    /// 5. Each process receives exactly its burst time
    ///
    /// # Returns
    /// `Ok(())` if all checks pass, `Err(violations)` with every issue found.
    pub fn conformance(&self, processes: &[ProcessRecord]) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();
        let bursts: HashMap<ProcessId, i64> =
            processes.iter().map(|p| (p.id, p.burst_time)).collect();
        let mut received: HashMap<ProcessId, i64> = HashMap::new();

        for (i, entry) in self.entries.iter().enumerate() {
            if entry.duration() <= 0 {
                violations.push(Violation::new(
                    ViolationType::EmptyBurst,
                    Some(entry.id),
                    format!(
                        "Entry {i} for P{} has no length ({}-{})",
                        entry.id, entry.start_time, entry.end_time
                    ),
                ));
            }
            if !bursts.contains_key(&entry.id) {
                violations.push(Violation::new(
                    ViolationType::UnknownProcess,
                    Some(entry.id),
                    format!("Entry {i} references unknown process P{}", entry.id),
                ));
            }
            if let Some(prev) = i.checked_sub(1).map(|j| &self.entries[j]) {
                if entry.start_time < prev.start_time {
                    violations.push(Violation::new(
                        ViolationType::OutOfOrder,
                        Some(entry.id),
                        format!(
                            "Entry {i} starts at {} before previous start {}",
                            entry.start_time, prev.start_time
                        ),
                    ));
                } else if entry.start_time < prev.end_time {
                    violations.push(Violation::new(
                        ViolationType::Overlap,
                        Some(entry.id),
                        format!(
                            "P{} starts at {} while P{} runs until {}",
                            entry.id, entry.start_time, prev.id, prev.end_time
                        ),
                    ));
                }
            }
            let got = received.entry(entry.id).or_insert(0);
            *got = got.saturating_add(entry.duration());
        }

        for p in processes {
            let got = received.get(&p.id).copied().unwrap_or(0);
            if got != p.burst_time {
                violations.push(Violation::new(
                    ViolationType::BurstMismatch,
                    Some(p.id),
                    format!("P{} received {got} ticks, needs {}", p.id, p.burst_time),
                ));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl FromIterator<ScheduleEntry> for Schedule {
    fn from_iter<T: IntoIterator<Item = ScheduleEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.run(1, 0, 2);
        s.run(2, 2, 4);
        s.run(1, 4, 6);
        s.run(3, 8, 9);
        s
    }

    fn sample_processes() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::new(1, 0, 4),
            ProcessRecord::new(2, 1, 2),
            ProcessRecord::new(3, 8, 1),
        ]
    }

    #[test]
    fn test_schedule_makespan_and_idle() {
        let s = sample_schedule();
        assert_eq!(s.makespan(), 9);
        assert_eq!(s.busy_time(), 7);
        assert_eq!(s.idle_time(), 2);
    }

    #[test]
    fn test_first_start_and_completion() {
        let s = sample_schedule();
        assert_eq!(s.first_start(1), Some(0));
        assert_eq!(s.completion_time(1), Some(6));
        assert_eq!(s.completion_time(3), Some(9));
        assert_eq!(s.first_start(99), None);
        assert_eq!(s.entries_for(1).len(), 2);
    }

    #[test]
    fn test_counts() {
        let s = sample_schedule();
        assert_eq!(s.len(), 4);
        assert_eq!(s.process_count(), 3);
        assert_eq!(s.context_switches(), 3);
    }

    #[test]
    fn test_conformance_ok() {
        assert!(sample_schedule().conformance(&sample_processes()).is_ok());
    }

    #[test]
    fn test_conformance_overlap_and_mismatch() {
        let s: Schedule = [ScheduleEntry::new(1, 0, 3), ScheduleEntry::new(2, 2, 4)]
            .into_iter()
            .collect();
        let ps = vec![ProcessRecord::new(1, 0, 3), ProcessRecord::new(2, 0, 3)];

        let violations = s.conformance(&ps).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.violation_type == ViolationType::Overlap));
        assert!(violations
            .iter()
            .any(|v| v.violation_type == ViolationType::BurstMismatch && v.process_id == Some(2)));
    }

    #[test]
    fn test_conformance_out_of_order_and_unknown() {
        let s: Schedule = [ScheduleEntry::new(1, 5, 6), ScheduleEntry::new(7, 0, 1)]
            .into_iter()
            .collect();
        let ps = vec![ProcessRecord::new(1, 0, 1)];

        let violations = s.conformance(&ps).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.violation_type == ViolationType::OutOfOrder));
        assert!(violations
            .iter()
            .any(|v| v.violation_type == ViolationType::UnknownProcess));
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.makespan(), 0);
        assert_eq!(s.context_switches(), 0);
    }
}
