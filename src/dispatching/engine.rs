//! Dispatcher: a selection rule plus a deterministic tie-breaker.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{SelectionContext, SelectionRule};
use crate::models::Process;

/// How ties are broken after the primary rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// First candidate in list order wins.
    ///
    /// List order is the remaining-process order (input order with
    /// finished processes removed). This is implementation-defined scan
    /// order rather than a stated rule, kept for compatibility.
    #[default]
    ListOrder,
    /// Earliest arrival wins, then list order.
    EarliestArrival,
    /// Lowest process id wins.
    ById,
}

/// Picks the next process to run from a ready set.
///
/// # Example
/// ```
/// use cpu_sched::dispatching::{Dispatcher, SelectionContext};
/// use cpu_sched::dispatching::rules;
/// use cpu_sched::models::Process;
///
/// let dispatcher = Dispatcher::new(rules::HighestPriority);
/// let ready = [
///     Process::new(1, 4).with_priority(3),
///     Process::new(2, 4).with_priority(1),
/// ];
/// assert_eq!(dispatcher.select_best(&ready, &SelectionContext::at_time(0)), Some(1));
/// ```
#[derive(Clone)]
pub struct Dispatcher {
    rule: Arc<dyn SelectionRule>,
    tie_breaker: TieBreaker,
}

impl Dispatcher {
    /// Creates a dispatcher with list-order tie-breaking.
    pub fn new<R: SelectionRule + 'static>(rule: R) -> Self {
        Self {
            rule: Arc::new(rule),
            tie_breaker: TieBreaker::ListOrder,
        }
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Primary rule name.
    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Active tie-breaker.
    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Returns the index of the process to dispatch, `None` if `ready` is empty.
    ///
    /// Only a strictly better candidate replaces the current best, so under
    /// [`TieBreaker::ListOrder`] the earliest index wins any tie.
    pub fn select_best(&self, ready: &[Process], context: &SelectionContext) -> Option<usize> {
        let all: Vec<usize> = (0..ready.len()).collect();
        self.select_from(ready, &all, context)
    }

    /// Same as [`select_best`](Self::select_best) over indices into `pool`.
    ///
    /// `candidates` lists pool indices in list order. Returns the chosen
    /// pool index.
    pub fn select_from(
        &self,
        pool: &[Process],
        candidates: &[usize],
        context: &SelectionContext,
    ) -> Option<usize> {
        let mut best: Option<usize> = None;
        for &idx in candidates {
            let better = match best {
                None => true,
                Some(b) => self.compare(&pool[idx], &pool[b], context) == Ordering::Less,
            };
            if better {
                best = Some(idx);
            }
        }
        best
    }

    fn compare(&self, a: &Process, b: &Process, context: &SelectionContext) -> Ordering {
        let primary = self
            .rule
            .evaluate(a, context)
            .cmp(&self.rule.evaluate(b, context));
        if primary != Ordering::Equal {
            return primary;
        }

        match self.tie_breaker {
            TieBreaker::ListOrder => Ordering::Equal,
            TieBreaker::EarliestArrival => a.arrival_time.cmp(&b.arrival_time),
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("rule", &self.rule.name())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
