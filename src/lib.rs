//! CPU scheduling simulator.
//!
//! Simulates classic single-processor scheduling disciplines over a fixed
//! set of processes and reports per-process timing metrics together with
//! an execution timeline (Gantt chart).
//!
//! # Modules
//!
//! - **`models`**: Domain types `Process`, `CompletedProcess`, `Timeline`,
//!   `RunResult`, `Policy`
//! - **`registry`**: Session process list with admission checks
//! - **`validation`**: Input integrity checks (duplicate IDs, burst/arrival ranges)
//! - **`dispatching`**: Selection rules and tie-breaking for non-preemptive policies
//! - **`scheduler`**: FCFS, SJF, Priority, Round Robin and run metrics
//! - **`store`**: Flat-file persistence of process lists
//! - **`report`**: Text tables and Gantt charts
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::{Policy, Process};
//! use cpu_sched::registry::ProcessRegistry;
//! use cpu_sched::scheduler::{simulate, RunMetrics};
//!
//! let mut registry = ProcessRegistry::new();
//! registry.add(Process::new(1, 5)).unwrap();
//! registry.add(Process::new(2, 3).with_arrival(1)).unwrap();
//! registry.add(Process::new(3, 8).with_arrival(2)).unwrap();
//!
//! let result = simulate(registry.snapshot(), Policy::FirstComeFirstServed).unwrap();
//! assert_eq!(result.completion_times(), vec![5, 8, 16]);
//!
//! let metrics = RunMetrics::calculate(&result);
//! assert!((metrics.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod registry;
pub mod report;
pub mod scheduler;
pub mod store;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
