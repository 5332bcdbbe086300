//! Execution timeline (Gantt chart) model.
//!
//! A timeline is the chronological list of slices during which the single
//! processing unit was either running one process or idle. Slices are
//! contiguous: each starts where the previous one ended, the first starts
//! at t=0.

use serde::{Deserialize, Serialize};

/// One contiguous execution slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Running process, or `None` for an idle gap.
    pub process_id: Option<i64>,
    /// Slice start instant.
    pub start: i64,
    /// Slice length (ticks).
    pub duration: i64,
}

impl TimelineEntry {
    /// Creates a slice during which `process_id` ran.
    pub fn run(process_id: i64, start: i64, duration: i64) -> Self {
        Self {
            process_id: Some(process_id),
            start,
            duration,
        }
    }

    /// Creates an idle slice.
    pub fn idle(start: i64, duration: i64) -> Self {
        Self {
            process_id: None,
            start,
            duration,
        }
    }

    /// Slice end instant (exclusive).
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.duration
    }

    /// Whether this slice is an idle gap.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process_id.is_none()
    }

    /// Whether instant `t` falls inside `[start, end)`.
    #[inline]
    pub fn covers(&self, t: i64) -> bool {
        t >= self.start && t < self.end()
    }
}

/// Ordered list of execution slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in chronological order.
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// End of the last slice (0 when empty).
    pub fn end(&self) -> i64 {
        self.entries.last().map(|e| e.end()).unwrap_or(0)
    }

    /// Appends a run slice starting at the current end.
    pub fn push_run(&mut self, process_id: i64, duration: i64) {
        let entry = TimelineEntry::run(process_id, self.end(), duration);
        log::trace!("slice P{} [{}, {})", process_id, entry.start, entry.end());
        self.entries.push(entry);
    }

    /// Records an idle gap up to `until`. No-op if `until` is not ahead.
    pub fn idle_until(&mut self, until: i64) {
        let start = self.end();
        if until > start {
            log::trace!("idle [{}, {})", start, until);
            self.entries.push(TimelineEntry::idle(start, until - start));
        }
    }

    /// The process executing at instant `t`, if any.
    pub fn process_at(&self, t: i64) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.covers(t))
            .and_then(|e| e.process_id)
    }

    /// All slices belonging to a process.
    pub fn slices_for(&self, process_id: i64) -> Vec<&TimelineEntry> {
        self.entries
            .iter()
            .filter(|e| e.process_id == Some(process_id))
            .collect()
    }

    /// Total time the given process ran.
    pub fn executed_time(&self, process_id: i64) -> i64 {
        self.slices_for(process_id).iter().map(|e| e.duration).sum()
    }

    /// Total time spent running any process.
    pub fn busy_time(&self) -> i64 {
        self.entries
            .iter()
            .filter(|e| !e.is_idle())
            .map(|e| e.duration)
            .sum()
    }

    /// Total time spent idle.
    pub fn idle_time(&self) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.is_idle())
            .map(|e| e.duration)
            .sum()
    }

    /// Number of switches between two different processes.
    ///
    /// Idle slices are skipped, so `P1 | idle | P1` counts as zero.
    pub fn context_switches(&self) -> usize {
        let running: Vec<i64> = self.entries.iter().filter_map(|e| e.process_id).collect();
        running.windows(2).filter(|w| w[0] != w[1]).count()
    }

    /// Number of slices (idle included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no slices.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.idle_until(2);
        t.push_run(1, 3);
        t.push_run(2, 2);
        t.push_run(1, 1);
        t
    }

    #[test]
    fn test_contiguous_slices() {
        let t = sample_timeline();
        assert_eq!(t.len(), 4);
        assert_eq!(t.entries[0], TimelineEntry::idle(0, 2));
        assert_eq!(t.entries[1], TimelineEntry::run(1, 2, 3));
        assert_eq!(t.entries[2], TimelineEntry::run(2, 5, 2));
        assert_eq!(t.entries[3], TimelineEntry::run(1, 7, 1));
        assert_eq!(t.end(), 8);
    }

    #[test]
    fn test_idle_until_not_ahead() {
        let mut t = Timeline::new();
        t.push_run(1, 4);
        t.idle_until(4);
        t.idle_until(3);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_process_at() {
        let t = sample_timeline();
        assert_eq!(t.process_at(0), None); // idle
        assert_eq!(t.process_at(2), Some(1));
        assert_eq!(t.process_at(4), Some(1));
        assert_eq!(t.process_at(5), Some(2));
        assert_eq!(t.process_at(7), Some(1));
        assert_eq!(t.process_at(8), None); // past the end
    }

    #[test]
    fn test_executed_and_busy_time() {
        let t = sample_timeline();
        assert_eq!(t.executed_time(1), 4);
        assert_eq!(t.executed_time(2), 2);
        assert_eq!(t.executed_time(99), 0);
        assert_eq!(t.busy_time(), 6);
        assert_eq!(t.idle_time(), 2);
        assert_eq!(t.slices_for(1).len(), 2);
    }

    #[test]
    fn test_context_switches() {
        let t = sample_timeline();
        assert_eq!(t.context_switches(), 2); // 1→2, 2→1

        let mut same = Timeline::new();
        same.push_run(1, 2);
        same.idle_until(5);
        same.push_run(1, 2);
        assert_eq!(same.context_switches(), 0);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.end(), 0);
        assert_eq!(t.process_at(0), None);
        assert_eq!(t.context_switches(), 0);
    }
}
