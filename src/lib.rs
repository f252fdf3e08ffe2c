//! CPU scheduling simulator.
//!
//! Generates a synthetic workload, runs it through First-Come-First-Served
//! and Round Robin, and compares the two passes. Nothing here touches real
//! OS processes: every run is a deterministic single pass over a
//! pseudo-random workload.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionTrace`, `TraceSegment`
//! - **`workload`**: Seedable synthetic workload generation
//! - **`scheduler`**: `FcfsScheduler`, `RoundRobinScheduler`, `RunMetrics`
//! - **`session`**: One complete run (generate → simulate → measure)
//! - **`report`**: Format-agnostic report and CSV/JSON result sink
//! - **`config`**: Command-line configuration
//! - **`validation`**: Configuration and workload checks
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::models::Process;
//! use cpu_sched_sim::session::{SchedulerSession, SimulationSettings};
//!
//! let session = SchedulerSession::new(SimulationSettings { process_count: 3, quantum: 4 });
//! let run = session
//!     .run_with_workload(vec![
//!         Process::new(1, 0, 5),
//!         Process::new(2, 1, 3),
//!         Process::new(3, 2, 1),
//!     ])
//!     .unwrap();
//! assert_eq!(run.rr.trace.as_slice(), &[1, 1, 1, 1, 2, 2, 2, 3, 1]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod session;
pub mod validation;
pub mod workload;
