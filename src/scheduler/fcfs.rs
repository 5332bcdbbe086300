//! First-come-first-served scheduling.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time (ties keep input order).
//! 2. For each process, idle until it arrives if the CPU is ahead of it.
//! 3. Run it to completion in a single slice.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the simulation.

use crate::error::ScheduleError;
use crate::models::{CompletedProcess, Policy, Process, RunResult, Timeline};

/// Runs first-come-first-served over a process snapshot.
///
/// Completed processes are reported in arrival order.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::first_come_first_served;
///
/// let processes = vec![
///     Process::new(1, 5),
///     Process::new(2, 3).with_arrival(1),
///     Process::new(3, 8).with_arrival(2),
/// ];
/// let result = first_come_first_served(&processes).unwrap();
/// assert_eq!(result.completion_times(), vec![5, 8, 16]);
/// ```
pub fn first_come_first_served(processes: &[Process]) -> Result<RunResult, ScheduleError> {
    super::check_input(processes)?;

    let mut order = processes.to_vec();
    order.sort_by_key(|p| p.arrival_time);

    let mut timeline = Timeline::new();
    let mut completed = Vec::with_capacity(order.len());
    let mut clock = 0;

    for process in order {
        if clock < process.arrival_time {
            log::debug!("FCFS: idle {} -> {}", clock, process.arrival_time);
            timeline.idle_until(process.arrival_time);
            clock = process.arrival_time;
        }

        log::debug!("FCFS: t={} dispatch P{}", clock, process.id);
        timeline.push_run(process.id, process.burst_time);
        clock += process.burst_time;
        completed.push(CompletedProcess::finish(process, clock));
    }

    log::info!("FCFS finished {} process(es) at t={}", completed.len(), clock);
    Ok(RunResult::new(Policy::FirstComeFirstServed, completed, timeline))
}
