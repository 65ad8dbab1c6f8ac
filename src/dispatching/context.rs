//! Scheduling context for dispatching rule evaluation.

use crate::models::ProcessRecord;

/// Runtime scheduling state passed to dispatching rules.
///
/// Holds the simulation clock at a decision point. Times are ticks
/// relative to the simulation epoch (t=0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulation time.
    pub current_time: i64,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }

    /// Whether `process` has arrived by the current time.
    #[inline]
    pub fn is_ready(&self, process: &ProcessRecord) -> bool {
        process.arrival_time <= self.current_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readiness() {
        let ctx = SchedulingContext::at_time(5);
        let early = ProcessRecord::new(1, 2, 3);
        let late = ProcessRecord::new(2, 7, 1);
        assert!(ctx.is_ready(&early));
        assert!(!ctx.is_ready(&late));
        assert!(SchedulingContext::at_time(7).is_ready(&late));
    }
}
