//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (stable).
//! 2. Walk the order with a clock starting at 0; if the CPU would sit idle
//!    until the next arrival, jump the clock forward (idle ticks are not
//!    traced).
//! 3. Each process waits `clock - arrival`, then runs its whole burst.
//!
//! # Complexity
//! O(n log n + B) where n=processes, B=total burst ticks (trace length).

use log::{debug, info};

use super::{admission_order, fresh_copy, CpuScheduler, SimulationOutcome};
use crate::models::{total_burst, ExecutionTrace, Process, Ticks};

/// Non-preemptive arrival-order scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::{CpuScheduler, FcfsScheduler};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let outcome = FcfsScheduler.simulate(&processes);
/// assert_eq!(outcome.waiting_times(), vec![0, 4]);
/// assert_eq!(outcome.trace.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl CpuScheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn simulate(&self, processes: &[Process]) -> SimulationOutcome {
        info!("running FCFS over {} processes", processes.len());

        let mut run = fresh_copy(processes);
        let mut trace = ExecutionTrace::with_capacity(total_burst(&run) as usize);
        let mut clock: Ticks = 0;
        let mut total_waiting: Ticks = 0;

        for idx in admission_order(&run) {
            let process = &mut run[idx];
            if clock < process.arrival_time {
                debug!(
                    "t={clock} idle until P{} arrives at {}",
                    process.id, process.arrival_time
                );
                clock = process.arrival_time;
            }

            process.waiting_time = clock - process.arrival_time;
            total_waiting += process.waiting_time;

            trace.record(process.id, process.burst_time);
            clock += process.burst_time;
            process.remaining_time = 0;

            debug!(
                "P{} ran to t={clock}, waited {}",
                process.id, process.waiting_time
            );
        }

        let outcome = SimulationOutcome {
            algorithm: self.name(),
            processes: run,
            trace,
            total_waiting,
            completion_time: clock,
        };

        match outcome.average_waiting_time() {
            Some(avg) => info!("FCFS: average waiting time = {avg:.2}"),
            None => info!("FCFS: no processes, average waiting time undefined"),
        }
        outcome
    }
}
