//! Simulation domain models.
//!
//! Provides the data types exchanged between the caller, the scheduling
//! disciplines, and the metrics calculator.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessRecord` | Input: one simulated process |
//! | `ScheduleEntry` | Output: one contiguous CPU burst |
//! | `Schedule` | Output: ordered bursts for one run |

mod process;
mod schedule;

pub use process::{ProcessId, ProcessRecord};
pub use schedule::{Schedule, ScheduleEntry, Violation, ViolationType};
