//! Process registry.
//!
//! The ordered set of processes for the current session. Scheduling runs
//! only ever see a read-only [`snapshot`](ProcessRegistry::snapshot), so
//! the same registry can be fed to every policy in turn.

use serde::{Deserialize, Serialize};

use crate::models::Process;
use crate::validation::{self, ValidationError, ValidationResult};

/// Ordered, validated list of process records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
}

impl ProcessRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a process list, rejecting invalid sets.
    pub fn from_processes(processes: Vec<Process>) -> Result<Self, Vec<ValidationError>> {
        let mut registry = Self::new();
        registry.replace(processes)?;
        Ok(registry)
    }

    /// Adds one record.
    ///
    /// Rejects a duplicate id, a non-positive burst, a negative arrival, or
    /// a record that would push the set past the clock range.
    /// The registry is unchanged on error.
    pub fn add(&mut self, process: Process) -> ValidationResult {
        let mut errors = Vec::new();
        if self.contains(process.id) {
            errors.push(validation::duplicate_id(process.id));
        }
        if let Err(range_errors) = validation::validate_process(&process) {
            errors.extend(range_errors);
        }
        if validation::clock_horizon(self.processes.iter().chain([&process])).is_none() {
            errors.push(validation::clock_overflow(self.processes.len() + 1));
        }

        if errors.is_empty() {
            self.processes.push(process);
            Ok(())
        } else {
            log::warn!("rejected process {}: {} error(s)", process.id, errors.len());
            Err(errors)
        }
    }

    /// Replaces the whole list (bulk load).
    ///
    /// All-or-nothing: if any record is invalid the current list is kept.
    pub fn replace(&mut self, processes: Vec<Process>) -> ValidationResult {
        if let Err(errors) = validation::validate_processes(&processes) {
            log::warn!("rejected bulk load of {} process(es)", processes.len());
            return Err(errors);
        }
        self.processes = processes;
        Ok(())
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.processes.clear();
    }

    /// Read-only view for a scheduling run.
    pub fn snapshot(&self) -> &[Process] {
        &self.processes
    }

    /// Finds a record by id.
    pub fn get(&self, id: i64) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Whether a record with this id exists.
    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}
