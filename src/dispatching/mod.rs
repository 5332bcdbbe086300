//! Selection rules and dispatcher for non-preemptive scheduling.
//!
//! At every decision point a non-preemptive policy picks one process out
//! of the ready set. The pick is made by a [`Dispatcher`]: a primary
//! [`SelectionRule`] plus a final [`TieBreaker`].
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::{Dispatcher, SelectionContext, TieBreaker};
//! use cpu_sched::dispatching::rules;
//! use cpu_sched::models::Process;
//!
//! let dispatcher = Dispatcher::new(rules::ShortestBurst)
//!     .with_tie_breaker(TieBreaker::EarliestArrival);
//!
//! let ready = [Process::new(1, 8), Process::new(2, 3).with_arrival(1)];
//! let ctx = SelectionContext::at_time(1);
//! assert_eq!(dispatcher.select_best(&ready, &ctx), Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::SelectionContext;
pub use engine::{Dispatcher, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = dispatched first. Integer so that ties are exact.
pub type RuleScore = i64;

/// A rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a ready process at the current decision point.
    fn evaluate(&self, process: &Process, context: &SelectionContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
