//! Scheduling domain models.
//!
//! Provides the core data types for describing a simulation input and
//! its result.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input record (id, arrival, burst, priority) |
//! | `CompletedProcess` | Process plus completion/waiting/turnaround |
//! | `Timeline` | Chronological execution slices (Gantt chart) |
//! | `RunResult` | Completed processes + timeline for one `Policy` |

mod process;
mod run_result;
mod timeline;

pub use process::{CompletedProcess, Process};
pub use run_result::{Policy, RunResult};
pub use timeline::{Timeline, TimelineEntry};
