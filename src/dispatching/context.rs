//! Decision-point state passed to selection rules.

/// Simulation state at a dispatch decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionContext {
    /// Current simulation clock.
    pub current_time: i64,
}

impl SelectionContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }
}
