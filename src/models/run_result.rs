//! Run result (solution) model.
//!
//! The output of one scheduling run: which policy produced it, the
//! completed processes with their metrics, and the execution timeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CompletedProcess, Timeline};

/// Scheduling discipline selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// First-come-first-served, non-preemptive.
    FirstComeFirstServed,
    /// Shortest burst first, non-preemptive.
    ShortestJobFirst,
    /// Lowest priority value first, non-preemptive.
    Priority,
    /// Preemptive time slicing with a fixed quantum.
    RoundRobin {
        /// Maximum slice length per dispatch.
        quantum: i64,
    },
}

impl Policy {
    /// Short name (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstComeFirstServed => "FCFS",
            Self::ShortestJobFirst => "SJF",
            Self::Priority => "Priority",
            Self::RoundRobin { .. } => "RR",
        }
    }

    /// Whether the policy may interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstComeFirstServed => write!(f, "First Come First Serve (FCFS)"),
            Self::ShortestJobFirst => write!(f, "Shortest Job First (SJF)"),
            Self::Priority => write!(f, "Priority Scheduling"),
            Self::RoundRobin { quantum } => {
                write!(f, "Round Robin (Time Quantum = {quantum})")
            }
        }
    }
}

/// Result of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Policy that produced this result.
    pub policy: Policy,
    /// Completed processes, in policy-defined report order.
    pub completed: Vec<CompletedProcess>,
    /// Execution timeline.
    pub timeline: Timeline,
}

impl RunResult {
    /// Creates a result.
    pub fn new(policy: Policy, completed: Vec<CompletedProcess>, timeline: Timeline) -> Self {
        Self {
            policy,
            completed,
            timeline,
        }
    }

    /// Finds a completed process by id.
    pub fn process(&self, id: i64) -> Option<&CompletedProcess> {
        self.completed.iter().find(|c| c.id() == id)
    }

    /// Completion times in report order.
    pub fn completion_times(&self) -> Vec<i64> {
        self.completed.iter().map(|c| c.completion_time).collect()
    }

    /// Latest completion time (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.completed
            .iter()
            .map(|c| c.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Number of completed processes.
    pub fn process_count(&self) -> usize {
        self.completed.len()
    }
}
