//! Process model.
//!
//! A process is the unit of work the simulator schedules: it becomes
//! eligible at its arrival time and needs a fixed amount of CPU time
//! (its burst) to finish.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process seed record.
///
/// Immutable input to a scheduling run. The engine never mutates it;
/// remaining work is tracked on a private working copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: i64,
    /// Instant the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i64,
}

impl Process {
    /// Creates a process arriving at t=0 with priority 0.
    pub fn new(id: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time: 0,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: i64) -> bool {
        self.arrival_time <= clock
    }
}

/// A process that ran to completion, with its derived timing metrics.
///
/// # Invariants
/// - `turnaround_time == completion_time - arrival_time`
/// - `waiting_time == turnaround_time - burst_time`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// The input record.
    #[serde(flatten)]
    pub process: Process,
    /// Instant the last unit of work finished.
    pub completion_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
}

impl CompletedProcess {
    /// Derives the timing metrics of `process` finishing at `completion_time`.
    pub fn finish(process: Process, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            process,
            completion_time,
            waiting_time: turnaround_time - process.burst_time,
            turnaround_time,
        }
    }

    /// Process identifier.
    #[inline]
    pub fn id(&self) -> i64 {
        self.process.id
    }
}
