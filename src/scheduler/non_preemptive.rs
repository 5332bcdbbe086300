//! Non-preemptive selection scheduling (SJF, Priority).
//!
//! # Algorithm
//!
//! Repeat until every process has run:
//! 1. Collect the remaining processes that have arrived by the clock.
//! 2. If none has, idle until the earliest remaining arrival.
//! 3. Otherwise let the dispatcher pick one and run it to completion.
//!
//! The remaining list keeps input order, so a list-order tie-breaker
//! favors whichever tied process was supplied first.
//!
//! # Complexity
//! O(n²): each of the n decisions scans the remaining list.

use crate::dispatching::{rules, Dispatcher, SelectionContext, TieBreaker};
use crate::error::ScheduleError;
use crate::models::{CompletedProcess, Policy, Process, RunResult, Timeline};

/// Non-preemptive scheduler driven by a selection rule.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::NonPreemptiveScheduler;
///
/// let processes = vec![Process::new(1, 8), Process::new(2, 4).with_arrival(1)];
/// let result = NonPreemptiveScheduler::shortest_job_first()
///     .schedule(&processes)
///     .unwrap();
/// // P1 is already running when the shorter P2 arrives
/// assert_eq!(result.completion_times(), vec![8, 12]);
/// ```
#[derive(Debug, Clone)]
pub struct NonPreemptiveScheduler {
    policy: Policy,
    dispatcher: Dispatcher,
}

impl NonPreemptiveScheduler {
    /// Creates a scheduler from any dispatcher; `policy` labels the results.
    pub fn new(policy: Policy, dispatcher: Dispatcher) -> Self {
        Self { policy, dispatcher }
    }

    /// Shortest-job-first with list-order ties.
    pub fn shortest_job_first() -> Self {
        Self {
            policy: Policy::ShortestJobFirst,
            dispatcher: Dispatcher::new(rules::ShortestBurst),
        }
    }

    /// Priority scheduling (lower value first) with list-order ties.
    pub fn priority() -> Self {
        Self {
            policy: Policy::Priority,
            dispatcher: Dispatcher::new(rules::HighestPriority),
        }
    }

    /// Overrides the final tie-breaker.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.dispatcher = self.dispatcher.with_tie_breaker(tie_breaker);
        self
    }

    /// Policy reported in results.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Runs the simulation over a process snapshot.
    ///
    /// Completed processes are reported in completion order.
    pub fn schedule(&self, processes: &[Process]) -> Result<RunResult, ScheduleError> {
        super::check_input(processes)?;

        let name = self.dispatcher.rule_name();
        let mut remaining: Vec<usize> = (0..processes.len()).collect();
        let mut timeline = Timeline::new();
        let mut completed = Vec::with_capacity(processes.len());
        let mut clock = 0;

        while !remaining.is_empty() {
            let ready: Vec<usize> = remaining
                .iter()
                .copied()
                .filter(|&i| processes[i].has_arrived(clock))
                .collect();
            let ctx = SelectionContext::at_time(clock);

            let Some(chosen) = self.dispatcher.select_from(processes, &ready, &ctx) else {
                // Nothing has arrived yet: jump to the next arrival.
                // `remaining` is non-empty here, so `min` always yields one.
                let Some(next_arrival) = remaining.iter().map(|&i| processes[i].arrival_time).min()
                else {
                    break;
                };
                log::debug!("{name}: idle {clock} -> {next_arrival}");
                timeline.idle_until(next_arrival);
                clock = next_arrival;
                continue;
            };

            let process = processes[chosen];
            log::debug!(
                "{name}: t={clock} dispatch P{} out of {} ready",
                process.id,
                ready.len()
            );
            timeline.push_run(process.id, process.burst_time);
            clock += process.burst_time;
            completed.push(CompletedProcess::finish(process, clock));
            remaining.retain(|&i| i != chosen);
        }

        log::info!("{name} finished {} process(es) at t={clock}", completed.len());
        Ok(RunResult::new(self.policy, completed, timeline))
    }
}

/// Runs shortest-job-first (non-preemptive).
pub fn shortest_job_first(processes: &[Process]) -> Result<RunResult, ScheduleError> {
    NonPreemptiveScheduler::shortest_job_first().schedule(processes)
}

/// Runs priority scheduling (non-preemptive, lower value first).
pub fn priority(processes: &[Process]) -> Result<RunResult, ScheduleError> {
    NonPreemptiveScheduler::priority().schedule(processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineEntry;

    fn ids(r: &RunResult) -> Vec<i64> {
        r.completed.iter().map(|c| c.id()).collect()
    }

    #[test]
    fn test_sjf_basic() {
        let processes = vec![
            Process::new(1, 5),
            Process::new(2, 3).with_arrival(1),
            Process::new(3, 8).with_arrival(2),
        ];
        let r = shortest_job_first(&processes).unwrap();
        assert_eq!(ids(&r), vec![1, 2, 3]);
        assert_eq!(r.completion_times(), vec![5, 8, 16]);
        assert_eq!(r.policy, Policy::ShortestJobFirst);
        assert_eq!(NonPreemptiveScheduler::priority().policy(), Policy::Priority);
    }

    #[test]
    fn test_sjf_is_non_preemptive() {
        let processes = vec![Process::new(1, 8), Process::new(2, 4).with_arrival(1)];
        let r = shortest_job_first(&processes).unwrap();
        assert_eq!(r.process(1).map(|c| c.completion_time), Some(8));
        assert_eq!(r.process(2).map(|c| c.completion_time), Some(12));
        assert_eq!(r.process(2).map(|c| c.waiting_time), Some(7));
    }

    #[test]
    fn test_sjf_picks_shortest_ready() {
        let processes = vec![
            Process::new(1, 3),
            Process::new(2, 6).with_arrival(1),
            Process::new(3, 2).with_arrival(2),
            Process::new(4, 1).with_arrival(2),
        ];
        let r = shortest_job_first(&processes).unwrap();
        // t=3: ready {2(6), 3(2), 4(1)} → 4, then 3, then 2
        assert_eq!(ids(&r), vec![1, 4, 3, 2]);
        assert_eq!(r.completion_times(), vec![3, 4, 6, 12]);
    }

    #[test]
    fn test_sjf_list_order_tie() {
        // Equal bursts: the first-listed ready process wins even though it arrived later
        let processes = vec![
            Process::new(1, 2).with_arrival(1),
            Process::new(2, 2).with_arrival(0),
            Process::new(3, 10).with_arrival(0),
        ];
        let r = shortest_job_first(&processes).unwrap();
        // t=0: ready {2, 3} → 2; t=2: ready {1, 3} → 1
        assert_eq!(ids(&r), vec![2, 1, 3]);

        let tied = vec![Process::new(5, 4), Process::new(4, 4)];
        let r = shortest_job_first(&tied).unwrap();
        assert_eq!(ids(&r), vec![5, 4]);
    }

    #[test]
    fn test_sjf_custom_tie_breaker() {
        let tied = vec![Process::new(5, 4), Process::new(4, 4)];
        let r = NonPreemptiveScheduler::shortest_job_first()
            .with_tie_breaker(TieBreaker::ById)
            .schedule(&tied)
            .unwrap();
        assert_eq!(ids(&r), vec![4, 5]);
    }

    #[test]
    fn test_sjf_idle_gap() {
        let processes = vec![
            Process::new(1, 2).with_arrival(3),
            Process::new(2, 1).with_arrival(10),
        ];
        let r = shortest_job_first(&processes).unwrap();
        assert_eq!(
            r.timeline.entries,
            vec![
                TimelineEntry::idle(0, 3),
                TimelineEntry::run(1, 3, 2),
                TimelineEntry::idle(5, 5),
                TimelineEntry::run(2, 10, 1),
            ]
        );
        assert_eq!(r.completion_times(), vec![5, 11]);
    }

    #[test]
    fn test_idle_jumps_to_earliest_unlisted_arrival() {
        // The earliest arrival is listed last
        let processes = vec![
            Process::new(1, 2).with_arrival(9),
            Process::new(2, 3).with_arrival(6),
            Process::new(3, 1).with_arrival(4),
        ];
        let r = shortest_job_first(&processes).unwrap();
        assert_eq!(r.timeline.entries[0], TimelineEntry::idle(0, 4));
        assert_eq!(ids(&r), vec![3, 2, 1]);
        assert_eq!(r.completion_times(), vec![5, 9, 11]);
    }

    #[test]
    fn test_priority_basic() {
        let processes = vec![
            Process::new(1, 4).with_priority(3),
            Process::new(2, 3).with_arrival(1).with_priority(1),
            Process::new(3, 2).with_arrival(2).with_priority(2),
        ];
        let r = priority(&processes).unwrap();
        // P1 alone at t=0; at t=4 P2 (pr 1) beats P3 (pr 2)
        assert_eq!(ids(&r), vec![1, 2, 3]);
        assert_eq!(r.completion_times(), vec![4, 7, 9]);
        assert_eq!(r.policy, Policy::Priority);
    }

    #[test]
    fn test_priority_ignores_burst() {
        let processes = vec![
            Process::new(1, 1).with_priority(5),
            Process::new(2, 9).with_priority(1),
        ];
        let r = priority(&processes).unwrap();
        assert_eq!(ids(&r), vec![2, 1]);
        assert_eq!(r.completion_times(), vec![9, 10]);
    }

    #[test]
    fn test_priority_list_order_tie() {
        let processes = vec![
            Process::new(1, 3).with_priority(2),
            Process::new(2, 1).with_priority(2),
        ];
        let r = priority(&processes).unwrap();
        assert_eq!(ids(&r), vec![1, 2]);
    }

    #[test]
    fn test_arrival_rule_matches_fcfs() {
        let processes = vec![
            Process::new(1, 4).with_arrival(6),
            Process::new(2, 3).with_arrival(0),
            Process::new(3, 2).with_arrival(0),
            Process::new(4, 5).with_arrival(2),
        ];
        let by_rule = NonPreemptiveScheduler::new(
            Policy::FirstComeFirstServed,
            Dispatcher::new(rules::EarliestArrival),
        )
        .schedule(&processes)
        .unwrap();
        let fcfs = crate::scheduler::first_come_first_served(&processes).unwrap();
        assert_eq!(by_rule, fcfs);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(shortest_job_first(&[]), Err(ScheduleError::EmptyInput));
        assert_eq!(priority(&[]), Err(ScheduleError::EmptyInput));
    }
}
