//! Scheduling policies and run metrics.
//!
//! Every policy is a pure function from a process snapshot (plus its
//! parameter) to a [`RunResult`]. Nothing is retained between runs, so the
//! same snapshot can be replayed under each policy in any order.
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | no | arrival order |
//! | SJF | no | shortest burst among arrived |
//! | Priority | no | lowest priority value among arrived |
//! | Round Robin | yes | FIFO ready queue, fixed quantum |
//!
//! All policies insert explicit idle slices into the timeline whenever the
//! clock jumps ahead to the next arrival.

mod fcfs;
mod metrics;
mod non_preemptive;
mod round_robin;

pub use fcfs::first_come_first_served;
pub use metrics::RunMetrics;
pub use non_preemptive::{priority, shortest_job_first, NonPreemptiveScheduler};
pub use round_robin::round_robin;

use crate::error::ScheduleError;
use crate::models::{Policy, Process, RunResult};
use crate::validation;

/// Runs the given policy over a process snapshot.
///
/// # Example
///
/// ```
/// use cpu_sched::models::{Policy, Process};
/// use cpu_sched::scheduler::{simulate, RunMetrics};
///
/// let processes = vec![Process::new(1, 4), Process::new(2, 2).with_arrival(1)];
/// let result = simulate(&processes, Policy::RoundRobin { quantum: 2 }).unwrap();
/// let metrics = RunMetrics::calculate(&result);
/// assert_eq!(metrics.makespan, 6);
/// ```
pub fn simulate(processes: &[Process], policy: Policy) -> Result<RunResult, ScheduleError> {
    match policy {
        Policy::FirstComeFirstServed => first_come_first_served(processes),
        Policy::ShortestJobFirst => shortest_job_first(processes),
        Policy::Priority => priority(processes),
        Policy::RoundRobin { quantum } => round_robin(processes, quantum),
    }
}

/// Refuses input no policy can run: an empty set, or one whose clock
/// could leave the `i64` range.
fn check_input(processes: &[Process]) -> Result<(), ScheduleError> {
    if processes.is_empty() {
        return Err(ScheduleError::EmptyInput);
    }
    if validation::clock_horizon(processes).is_none() {
        log::warn!("refusing {} process(es): clock overflow", processes.len());
        return Err(ScheduleError::ClockOverflow);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::{rules, SelectionContext, SelectionRule};
    use crate::workload::{self, WorkloadConfig};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn all_policies() -> Vec<Policy> {
        vec![
            Policy::FirstComeFirstServed,
            Policy::ShortestJobFirst,
            Policy::Priority,
            Policy::RoundRobin { quantum: 1 },
            Policy::RoundRobin { quantum: 3 },
            Policy::RoundRobin { quantum: 7 },
        ]
    }

    /// Seeded workloads in shuffled list order, so input order differs from
    /// both arrival order and id order.
    fn random_workloads() -> Vec<Vec<Process>> {
        (0..50)
            .map(|seed| {
                let config = WorkloadConfig::new(1 + (seed as usize % 12))
                    .with_seed(seed)
                    .with_arrival_span(20)
                    .with_burst_range(1, 9)
                    .with_priority_range(1, 4);
                let mut processes = workload::generate(&config);
                processes.shuffle(&mut StdRng::seed_from_u64(seed));
                processes
            })
            .collect()
    }

    fn position(processes: &[Process], id: i64) -> usize {
        processes
            .iter()
            .position(|p| p.id == id)
            .unwrap_or(usize::MAX)
    }

    #[test]
    fn test_workloads_are_unsorted() {
        let unsorted = random_workloads()
            .iter()
            .filter(|ps| ps.windows(2).any(|w| w[0].arrival_time > w[1].arrival_time))
            .count();
        assert!(unsorted > 10);
    }

    #[test]
    fn test_simulate_dispatches_policy() {
        let processes = vec![Process::new(1, 3)];
        for policy in all_policies() {
            let r = simulate(&processes, policy).unwrap();
            assert_eq!(r.policy, policy);
            assert_eq!(r.completion_times(), vec![3]);
        }
    }

    #[test]
    fn test_empty_input_for_every_policy() {
        for policy in all_policies() {
            assert_eq!(simulate(&[], policy), Err(ScheduleError::EmptyInput));
        }
    }

    #[test]
    fn test_clock_overflow_for_every_policy() {
        let late = vec![Process::new(1, 2).with_arrival(i64::MAX - 1)];
        let long = vec![Process::new(1, i64::MAX), Process::new(2, 1)];
        for policy in all_policies() {
            assert_eq!(simulate(&late, policy), Err(ScheduleError::ClockOverflow));
            assert_eq!(simulate(&long, policy), Err(ScheduleError::ClockOverflow));
        }

        // The largest clock that still fits runs normally
        let edge = vec![Process::new(1, 2).with_arrival(i64::MAX - 2)];
        for policy in all_policies() {
            let r = simulate(&edge, policy).unwrap();
            assert_eq!(r.completion_times(), vec![i64::MAX]);
            assert_eq!(r.completed[0].waiting_time, 0);
        }
    }

    #[test]
    fn test_metric_identities() {
        for processes in random_workloads() {
            for policy in all_policies() {
                let r = simulate(&processes, policy).unwrap();
                assert_eq!(r.completed.len(), processes.len());
                for c in &r.completed {
                    assert_eq!(c.turnaround_time, c.completion_time - c.process.arrival_time);
                    assert_eq!(c.waiting_time, c.turnaround_time - c.process.burst_time);
                    assert!(c.waiting_time >= 0);
                    assert!(c.turnaround_time >= 0);
                }
            }
        }
    }

    #[test]
    fn test_work_conservation() {
        for processes in random_workloads() {
            for policy in all_policies() {
                let r = simulate(&processes, policy).unwrap();
                for p in &processes {
                    assert_eq!(r.timeline.executed_time(p.id), p.burst_time, "{policy:?}");
                }
            }
        }
    }

    #[test]
    fn test_timeline_is_gap_free() {
        for processes in random_workloads() {
            for policy in all_policies() {
                let r = simulate(&processes, policy).unwrap();
                let mut expected_start = 0;
                for e in &r.timeline.entries {
                    assert_eq!(e.start, expected_start);
                    assert!(e.duration > 0);
                    expected_start = e.end();
                }
                assert_eq!(r.timeline.end(), r.makespan());
                // Each process's last slice ends at its completion time
                for c in &r.completed {
                    let last = r.timeline.slices_for(c.id()).last().map(|e| e.end());
                    assert_eq!(last, Some(c.completion_time));
                }
            }
        }
    }

    #[test]
    fn test_fcfs_completion_follows_arrival() {
        for processes in random_workloads() {
            let r = first_come_first_served(&processes).unwrap();
            for pair in r.completed.windows(2) {
                assert!(pair[0].process.arrival_time <= pair[1].process.arrival_time);
                assert!(pair[0].completion_time < pair[1].completion_time);
            }
        }
    }

    #[test]
    fn test_arrival_sort_is_stable() {
        for processes in random_workloads() {
            for policy in [Policy::FirstComeFirstServed, Policy::RoundRobin { quantum: 3 }] {
                let r = simulate(&processes, policy).unwrap();
                for pair in r.completed.windows(2) {
                    if pair[0].process.arrival_time == pair[1].process.arrival_time {
                        assert!(
                            position(&processes, pair[0].id()) < position(&processes, pair[1].id()),
                            "{policy:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_ties_follow_list_order() {
        let cases: Vec<(Policy, &dyn SelectionRule)> = vec![
            (Policy::ShortestJobFirst, &rules::ShortestBurst as &dyn SelectionRule),
            (Policy::Priority, &rules::HighestPriority as &dyn SelectionRule),
        ];
        let mut ties = 0;
        for processes in random_workloads() {
            for (policy, rule) in &cases {
                let r = simulate(&processes, *policy).unwrap();
                for (k, chosen) in r.completed.iter().enumerate() {
                    let start = chosen.completion_time - chosen.process.burst_time;
                    let ctx = SelectionContext::at_time(start);
                    let score = rule.evaluate(&chosen.process, &ctx);
                    for later in &r.completed[k + 1..] {
                        if later.process.arrival_time <= start
                            && rule.evaluate(&later.process, &ctx) == score
                        {
                            ties += 1;
                            assert!(
                                position(&processes, chosen.id())
                                    < position(&processes, later.id())
                            );
                        }
                    }
                }
            }
        }
        assert!(ties > 0);
    }

    #[test]
    fn test_selection_is_minimal_among_arrived() {
        let cases: Vec<(Policy, &dyn SelectionRule)> = vec![
            (Policy::ShortestJobFirst, &rules::ShortestBurst as &dyn SelectionRule),
            (Policy::Priority, &rules::HighestPriority as &dyn SelectionRule),
        ];
        for processes in random_workloads() {
            for (policy, rule) in &cases {
                let r = simulate(&processes, *policy).unwrap();
                for (k, chosen) in r.completed.iter().enumerate() {
                    let start = chosen.completion_time - chosen.process.burst_time;
                    let ctx = SelectionContext::at_time(start);
                    let score = rule.evaluate(&chosen.process, &ctx);
                    for later in &r.completed[k + 1..] {
                        if later.process.arrival_time <= start {
                            assert!(score <= rule.evaluate(&later.process, &ctx));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_robin_slices_bounded() {
        for processes in random_workloads() {
            for quantum in [1, 2, 5] {
                let r = round_robin(&processes, quantum).unwrap();
                assert!(r.timeline.entries.iter().all(|e| e.is_idle() || e.duration <= quantum));
            }
        }
    }

    #[test]
    fn test_runs_are_idempotent() {
        for processes in random_workloads().into_iter().take(10) {
            for policy in all_policies() {
                let first = simulate(&processes, policy).unwrap();
                let second = simulate(&processes, policy).unwrap();
                assert_eq!(first, second);
            }
        }
    }
}
