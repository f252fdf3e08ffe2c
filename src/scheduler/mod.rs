//! CPU scheduling simulators and run metrics.
//!
//! Provides the two single-CPU disciplines compared by this crate and the
//! metrics derived from their execution traces.
//!
//! # Algorithms
//!
//! - `FcfsScheduler`: non-preemptive, runs processes to completion in
//!   arrival order.
//! - `RoundRobinScheduler`: preemptive, fixed quantum, circular FIFO ready
//!   queue.
//!
//! Both admit processes in the same order: ascending arrival time, ties
//! kept in generation order (stable sort).
//!
//! # KPI
//!
//! `RunMetrics` compares the two runs: average waiting time per discipline,
//! CPU utilization, throughput and starvation reduction.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod round_robin;

pub use fcfs::FcfsScheduler;
pub use kpi::{DegenerateMetric, RunMetrics, CPU_UTILIZATION_PCT, STARVATION_TARGET_PCT};
pub use round_robin::RoundRobinScheduler;

use std::fmt::Debug;

use crate::models::{ExecutionTrace, Process, ProcessId, Ticks};

/// A single-CPU scheduling discipline.
///
/// Implementations never mutate the caller's process set: they clone it,
/// reset run-scoped fields and report per-process results in the outcome.
pub trait CpuScheduler: Debug {
    /// Discipline name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Simulates the discipline over `processes`.
    fn simulate(&self, processes: &[Process]) -> SimulationOutcome;
}

/// Result of one simulated pass.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    /// Name of the discipline that produced this outcome.
    pub algorithm: &'static str,
    /// Per-process results, in the caller's original order.
    pub processes: Vec<Process>,
    /// Busy-tick execution trace.
    pub trace: ExecutionTrace,
    /// Sum of waiting times.
    pub total_waiting: Ticks,
    /// Clock value when the last process finished.
    pub completion_time: Ticks,
}

impl SimulationOutcome {
    /// Average waiting time.
    ///
    /// Returns `None` for an empty workload.
    pub fn average_waiting_time(&self) -> Option<f64> {
        if self.processes.is_empty() {
            None
        } else {
            Some(self.total_waiting as f64 / self.processes.len() as f64)
        }
    }

    /// Number of simulated processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Looks up a process result by ID.
    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Waiting times in the caller's original process order.
    pub fn waiting_times(&self) -> Vec<Ticks> {
        self.processes.iter().map(|p| p.waiting_time).collect()
    }
}

/// Returns indices into `processes` in admission order.
///
/// Ascending arrival time; `sort_by_key` is stable, so processes sharing an
/// arrival tick keep their original relative order.
pub(crate) fn admission_order(processes: &[Process]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| processes[i].arrival_time);
    indices
}

/// Clones a process set with run-scoped fields cleared.
pub(crate) fn fresh_copy(processes: &[Process]) -> Vec<Process> {
    processes
        .iter()
        .cloned()
        .map(|mut p| {
            p.reset();
            p
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admission_order_stable() {
        let set = vec![
            Process::new(1, 5, 1),
            Process::new(2, 0, 1),
            Process::new(3, 5, 1),
            Process::new(4, 0, 1),
        ];
        let order: Vec<_> = admission_order(&set)
            .into_iter()
            .map(|i| set[i].id)
            .collect();
        assert_eq!(order, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_fresh_copy_resets() {
        let mut p = Process::new(1, 0, 6);
        p.waiting_time = 3;
        p.remaining_time = 2;
        let copy = fresh_copy(&[p.clone()]);
        assert_eq!(copy[0].waiting_time, 0);
        assert_eq!(copy[0].remaining_time, 6);
        // Original untouched
        assert_eq!(p.remaining_time, 2);
    }

    #[test]
    fn test_empty_outcome_average() {
        let outcome = SimulationOutcome {
            algorithm: "FCFS",
            processes: Vec::new(),
            trace: ExecutionTrace::new(),
            total_waiting: 0,
            completion_time: 0,
        };
        assert!(outcome.average_waiting_time().is_none());
        assert_eq!(outcome.process_count(), 0);
    }
}
