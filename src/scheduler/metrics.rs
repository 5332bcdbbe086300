//! Run quality metrics.
//!
//! Computes standard CPU-scheduling indicators from a completed run.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Makespan | End of the last timeline slice |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//! | Context Switches | Adjacent slices of different processes |

use serde::{Deserialize, Serialize};

use crate::models::RunResult;

/// Aggregate indicators for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Number of completed processes.
    pub process_count: usize,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Longest waiting time of any single process.
    pub max_waiting_time: i64,
    /// End of the timeline.
    pub makespan: i64,
    /// Time spent running processes.
    pub busy_time: i64,
    /// Time spent idle.
    pub idle_time: i64,
    /// Fraction of the makespan spent busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per unit time.
    pub throughput: f64,
    /// Switches between different processes.
    pub context_switches: usize,
}

impl RunMetrics {
    /// Computes metrics from a run result.
    ///
    /// An empty result yields zeros; engine results are never empty.
    pub fn calculate(result: &RunResult) -> Self {
        let count = result.completed.len();
        // Per-process times fit the clock, their sum need not
        let total_waiting: f64 = result.completed.iter().map(|c| c.waiting_time as f64).sum();
        let total_turnaround: f64 = result
            .completed
            .iter()
            .map(|c| c.turnaround_time as f64)
            .sum();
        let max_waiting_time = result
            .completed
            .iter()
            .map(|c| c.waiting_time)
            .max()
            .unwrap_or(0);

        let (avg_waiting_time, avg_turnaround_time) = if count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_waiting / count as f64,
                total_turnaround / count as f64,
            )
        };

        let makespan = result.timeline.end();
        let busy_time = result.timeline.busy_time();
        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                count as f64 / makespan as f64,
            )
        };

        Self {
            process_count: count,
            avg_waiting_time,
            avg_turnaround_time,
            max_waiting_time,
            makespan,
            busy_time,
            idle_time: result.timeline.idle_time(),
            cpu_utilization,
            throughput,
            context_switches: result.timeline.context_switches(),
        }
    }
}
