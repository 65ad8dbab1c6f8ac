//! CPU scheduling simulator.
//!
//! Given a set of processes (arrival time, burst time, priority) and a
//! discipline, computes the single-CPU execution timeline and its
//! performance metrics. Input collection and rendering belong to the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessRecord`, `ScheduleEntry`, `Schedule`
//! - **`dispatching`**: Selection rules (FCFS, SJF, Priority) and the rule engine
//! - **`scheduler`**: The four disciplines, `Algorithm`, and `SimulationMetrics`
//! - **`validation`**: Input integrity checks (ranges, duplicate IDs)
//! - **`simulation`**: Orchestration — validate, dispatch, measure
//! - **`report`**: Timeline with idle slots and plain-text rendering
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::{simulate, Algorithm, ProcessRecord};
//!
//! let processes = ProcessRecord::numbered([(0, 5, 1), (1, 3, 1)]);
//! let outcome = simulate(&processes, Algorithm::Fcfs, None).unwrap();
//!
//! assert_eq!(outcome.schedule.makespan(), 8);
//! assert!((outcome.metrics.average_waiting_time - 2.0).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::{SimResult, SimulationError};
pub use models::{ProcessId, ProcessRecord, Schedule, ScheduleEntry};
pub use scheduler::{Algorithm, SimulationMetrics};
pub use simulation::{simulate, simulate_named, SimulationOutcome, SimulationRequest};
