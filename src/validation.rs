//! Input validation for process sets.
//!
//! Checks structural integrity of process records before they are admitted
//! into a registry. Detects:
//! - Duplicate IDs
//! - Non-positive burst times
//! - Negative arrival times
//! - Sets whose simulated clock would not fit in an `i64`

use crate::models::Process;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before the simulation epoch.
    NegativeArrival,
    /// The latest arrival plus the total burst time overflows the clock.
    ClockOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Checks a single record in isolation (burst and arrival ranges).
pub fn validate_process(process: &Process) -> ValidationResult {
    let mut errors = Vec::new();
    check_ranges(process, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a whole process set.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every burst time is positive
/// 3. Every arrival time is non-negative
/// 4. The whole set can run without overflowing the clock
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(duplicate_id(p.id));
        }
        check_ranges(p, &mut errors);
    }
    if clock_horizon(processes).is_none() {
        errors.push(clock_overflow(processes.len()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the clock of any run over `processes`.
///
/// No policy can advance the clock past the latest arrival plus the sum of
/// all bursts. Returns `None` when that bound does not fit in an `i64`.
pub fn clock_horizon<'a>(processes: impl IntoIterator<Item = &'a Process>) -> Option<i64> {
    let mut latest_arrival = 0_i64;
    let mut total_burst = 0_i64;
    for p in processes {
        latest_arrival = latest_arrival.max(p.arrival_time);
        total_burst = total_burst.checked_add(p.burst_time.max(0))?;
    }
    latest_arrival.checked_add(total_burst)
}

pub(crate) fn clock_overflow(count: usize) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::ClockOverflow,
        format!("Arrival and burst times of {count} process(es) overflow the simulation clock"),
    )
}

pub(crate) fn duplicate_id(id: i64) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::DuplicateId,
        format!("Duplicate process ID: {id}"),
    )
}

fn check_ranges(p: &Process, errors: &mut Vec<ValidationError>) {
    if p.burst_time <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveBurst,
            format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
        ));
    }
    if p.arrival_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeArrival,
            format!("Process {} has negative arrival time {}", p.id, p.arrival_time),
        ));
    }
}
