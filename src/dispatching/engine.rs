//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules lexicographically: the first rule decides and
//! later rules only break its ties. Processes that tie on every rule keep
//! their input order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessRecord;

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use cpu_sched_sim::dispatching::{rules, RuleEngine, SchedulingContext};
/// use cpu_sched_sim::models::ProcessRecord;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::ShortestBurst)
///     .with_tie_breaker(rules::EarliestArrival);
///
/// let processes = ProcessRecord::numbered([(0, 5, 1), (0, 2, 1)]);
/// let best = engine.select_best(&processes, &SchedulingContext::at_time(0));
/// assert_eq!(best, Some(1));
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when every earlier rule ties.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, primary first.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts processes by priority (first to run first).
    ///
    /// Returns indices into the original slice. The sort is stable, so
    /// full ties keep slice order.
    pub fn sort_indices(
        &self,
        processes: &[ProcessRecord],
        context: &SchedulingContext,
    ) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b], context));
        indices
    }

    /// Returns the index of the highest-priority process.
    pub fn select_best(
        &self,
        processes: &[ProcessRecord],
        context: &SchedulingContext,
    ) -> Option<usize> {
        self.best_of(processes, 0..processes.len(), context)
    }

    /// Returns the highest-priority index among `pending` whose process has
    /// arrived by `context.current_time`.
    ///
    /// `pending` is scanned in order; on a full tie the earlier index wins.
    pub fn select_ready(
        &self,
        processes: &[ProcessRecord],
        pending: &[usize],
        context: &SchedulingContext,
    ) -> Option<usize> {
        let ready = pending
            .iter()
            .copied()
            .filter(|&i| context.is_ready(&processes[i]));
        self.best_of(processes, ready, context)
    }

    /// Evaluates a single process and returns the score from each rule.
    pub fn evaluate(&self, process: &ProcessRecord, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(process, context))
            .collect()
    }

    fn best_of(
        &self,
        processes: &[ProcessRecord],
        candidates: impl Iterator<Item = usize>,
        context: &SchedulingContext,
    ) -> Option<usize> {
        // `min_by` keeps the last of equal elements, so fold explicitly.
        candidates.fold(None, |best, i| match best {
            Some(b) if self.compare(&processes[i], &processes[b], context) != Ordering::Less => {
                Some(b)
            }
            _ => Some(i),
        })
    }

    fn compare(&self, a: &ProcessRecord, b: &ProcessRecord, context: &SchedulingContext) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(a, context).cmp(&rule.evaluate(b, context)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
