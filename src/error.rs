//! Scheduling engine errors.

use std::fmt;

/// Why a scheduling run was refused.
///
/// The engine is total over non-empty input with a positive quantum whose
/// clock fits in an `i64`; these are the only ways a run can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    /// No processes were supplied.
    EmptyInput,
    /// Round robin was requested with a quantum ≤ 0.
    InvalidQuantum(i64),
    /// The latest arrival plus the total burst time overflows the clock.
    ClockOverflow,
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "no processes to schedule"),
            Self::InvalidQuantum(q) => {
                write!(f, "time quantum must be a positive integer, got {q}")
            }
            Self::ClockOverflow => write!(f, "process times overflow the simulation clock"),
        }
    }
}

impl std::error::Error for ScheduleError {}
