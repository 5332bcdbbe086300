//! Round-robin scheduling (preemptive, fixed quantum).
//!
//! # Algorithm
//!
//! Processes are stable-sorted by arrival and held in an owned working
//! list. The ready queue stores indices into that list.
//!
//! 1. Admit every process with arrival ≤ clock, in arrival order.
//! 2. If the queue is empty and processes are still unadmitted, idle
//!    until the next arrival.
//! 3. Dequeue the head and run it for `min(quantum, remaining)`.
//! 4. Admit processes that arrived during the slice, **then** requeue
//!    the preempted process. A process arriving exactly when a quantum
//!    expires is therefore queued ahead of the preempted one.
//! 5. A process whose remaining time hits zero completes at the clock.

use std::collections::VecDeque;

use crate::error::ScheduleError;
use crate::models::{CompletedProcess, Policy, Process, RunResult, Timeline};

/// Working state of one process during a round-robin run.
#[derive(Debug, Clone, Copy)]
struct Slot {
    process: Process,
    remaining: i64,
    completion: Option<i64>,
}

/// Runs round robin with the given quantum.
///
/// Completed processes are reported in arrival order.
///
/// # Errors
/// - [`ScheduleError::InvalidQuantum`] if `quantum <= 0`.
/// - [`ScheduleError::EmptyInput`] if `processes` is empty.
/// - [`ScheduleError::ClockOverflow`] if the run could overflow the clock.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::round_robin;
///
/// let processes = vec![Process::new(1, 5), Process::new(2, 3).with_arrival(1)];
/// let result = round_robin(&processes, 2).unwrap();
/// let slices: Vec<(Option<i64>, i64)> = result
///     .timeline
///     .entries
///     .iter()
///     .map(|e| (e.process_id, e.duration))
///     .collect();
/// assert_eq!(
///     slices,
///     vec![(Some(1), 2), (Some(2), 2), (Some(1), 2), (Some(2), 1), (Some(1), 1)]
/// );
/// ```
pub fn round_robin(processes: &[Process], quantum: i64) -> Result<RunResult, ScheduleError> {
    if quantum <= 0 {
        return Err(ScheduleError::InvalidQuantum(quantum));
    }
    super::check_input(processes)?;

    let mut order = processes.to_vec();
    order.sort_by_key(|p| p.arrival_time);
    let mut slots: Vec<Slot> = order
        .into_iter()
        .map(|process| Slot {
            process,
            remaining: process.burst_time,
            completion: None,
        })
        .collect();

    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut timeline = Timeline::new();
    let mut next = 0;
    let mut clock = 0;

    loop {
        admit(&slots, &mut next, clock, &mut ready);

        let Some(idx) = ready.pop_front() else {
            match slots.get(next) {
                Some(slot) => {
                    let arrival = slot.process.arrival_time;
                    log::debug!("RR: idle {clock} -> {arrival}");
                    timeline.idle_until(arrival);
                    clock = arrival;
                    continue;
                }
                None => break,
            }
        };

        let slot = &mut slots[idx];
        let slice = quantum.min(slot.remaining);
        log::debug!(
            "RR: t={clock} dispatch P{} for {slice} ({} left)",
            slot.process.id,
            slot.remaining
        );
        slot.remaining -= slice;
        timeline.push_run(slot.process.id, slice);
        clock += slice;

        let finished = slot.remaining == 0;
        if finished {
            slot.completion = Some(clock);
        }

        // Admit-then-requeue order decides who goes first on a same-instant arrival
        admit(&slots, &mut next, clock, &mut ready);
        if !finished {
            ready.push_back(idx);
        }
    }

    let completed: Vec<CompletedProcess> = slots
        .into_iter()
        .filter_map(|s| s.completion.map(|c| CompletedProcess::finish(s.process, c)))
        .collect();

    log::info!(
        "RR(q={quantum}) finished {} process(es) in {} slice(s) at t={clock}",
        completed.len(),
        timeline.len()
    );
    Ok(RunResult::new(
        Policy::RoundRobin { quantum },
        completed,
        timeline,
    ))
}

/// Moves every arrived process past `next` onto the ready queue.
fn admit(slots: &[Slot], next: &mut usize, clock: i64, ready: &mut VecDeque<usize>) {
    while *next < slots.len() && slots[*next].process.has_arrived(clock) {
        ready.push_back(*next);
        *next += 1;
    }
}
