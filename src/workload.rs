//! Random workload generation.
//!
//! Produces reproducible process sets from a seed, for demos and for
//! exercising the policies over many inputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Parameters for a random process set.
///
/// Ranges are inclusive. Ids are assigned `1..=count` in arrival order.
/// Fields set directly (or deserialized) are normalised by [`generate`]
/// the same way the `with_*` setters clamp them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// RNG seed.
    pub seed: u64,
    /// Arrivals are drawn from `0..=arrival_span`.
    pub arrival_span: i64,
    /// Minimum burst time.
    pub min_burst: i64,
    /// Maximum burst time.
    pub max_burst: i64,
    /// Minimum priority value.
    pub min_priority: i64,
    /// Maximum priority value.
    pub max_priority: i64,
}

impl WorkloadConfig {
    /// Creates a config for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            seed: 0,
            arrival_span: 10,
            min_burst: 1,
            max_burst: 10,
            min_priority: 1,
            max_priority: 10,
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the latest possible arrival.
    pub fn with_arrival_span(mut self, span: i64) -> Self {
        self.arrival_span = span.max(0);
        self
    }

    /// Sets the burst range. Bounds are clamped to at least 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        (self.min_burst, self.max_burst) = burst_bounds(min, max);
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i64, max: i64) -> Self {
        self.min_priority = min;
        self.max_priority = max.max(min);
        self
    }
}

fn burst_bounds(min: i64, max: i64) -> (i64, i64) {
    let min = min.max(1);
    (min, max.max(min))
}

/// Generates a process set.
///
/// The same config always yields the same processes.
///
/// # Example
/// ```
/// use cpu_sched::workload::{generate, WorkloadConfig};
///
/// let config = WorkloadConfig::new(5).with_seed(42);
/// let processes = generate(&config);
/// assert_eq!(processes.len(), 5);
/// assert_eq!(processes, generate(&config));
/// ```
pub fn generate(config: &WorkloadConfig) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let arrival_span = config.arrival_span.max(0);
    let (min_burst, max_burst) = burst_bounds(config.min_burst, config.max_burst);
    let max_priority = config.max_priority.max(config.min_priority);

    let mut arrivals: Vec<i64> = (0..config.count)
        .map(|_| rng.random_range(0..=arrival_span))
        .collect();
    arrivals.sort_unstable();

    arrivals
        .into_iter()
        .enumerate()
        .map(|(i, arrival)| {
            Process::new(i as i64 + 1, rng.random_range(min_burst..=max_burst))
                .with_arrival(arrival)
                .with_priority(rng.random_range(config.min_priority..=max_priority))
        })
        .collect()
}
