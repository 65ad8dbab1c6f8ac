//! Dispatching rules and rule engine.
//!
//! Every selection decision a discipline makes (which process to run next)
//! goes through a [`RuleEngine`] built from the rules in [`rules`].
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{rules, RuleEngine, SchedulingContext};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::HighestPriority)
//!     .with_tie_breaker(rules::EarliestArrival);
//!
//! let context = SchedulingContext::at_time(0);
//! // let next = engine.select_ready(&processes, &pending, &context);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;

use crate::models::ProcessRecord;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "FCFS").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process at the given decision point.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &ProcessRecord, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
