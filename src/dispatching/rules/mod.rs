//! Built-in selection rules.
//!
//! | Rule | Key | Policy |
//! |------|-----|--------|
//! | `ShortestBurst` | burst time | SJF |
//! | `HighestPriority` | priority value | Priority |
//! | `EarliestArrival` | arrival time | FCFS order |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionContext, SelectionRule};
use crate::models::Process;

/// Shortest Job First.
///
/// Prioritizes processes with the smallest total burst. Minimizes mean
/// waiting time among non-preemptive disciplines.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &SelectionContext) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Priority scheduling.
///
/// Lower numeric priority value runs first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn evaluate(&self, process: &Process, _context: &SelectionContext) -> RuleScore {
        process.priority
    }

    fn description(&self) -> &'static str {
        "Lowest priority value first"
    }
}

/// First come, first served.
///
/// With list-order tie-breaking, a non-preemptive run under this rule
/// dispatches in the same order as a stable sort by arrival.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process, _context: &SelectionContext) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First Come First Serve"
    }
}
