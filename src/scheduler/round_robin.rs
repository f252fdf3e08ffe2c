//! Round Robin scheduler.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (stable) to fix the admission sequence.
//! 2. At every decision point, admit all not-yet-admitted processes whose
//!    arrival is at or before the clock to the tail of a FIFO ready queue.
//! 3. Empty queue with arrivals still pending: the CPU idles until the next
//!    arrival, so the clock jumps straight to it.
//! 4. Otherwise run the head for `min(quantum, remaining)` ticks. Processes
//!    that arrived during the slice are admitted *before* the preempted
//!    process is re-queued at the tail.
//! 5. A finished process waits `finish - first_dispatch - burst`.
//!
//! # Complexity
//! O(n log n + B) where B=total burst ticks.

use std::collections::VecDeque;

use log::{debug, info, trace};

use super::{admission_order, fresh_copy, CpuScheduler, SimulationOutcome};
use crate::models::{total_burst, ExecutionTrace, Process, Ticks};
use crate::validation::{validate_quantum, ValidationError, ValidationErrorKind};

/// Preemptive fixed-quantum scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::{CpuScheduler, RoundRobinScheduler};
///
/// let rr = RoundRobinScheduler::new(2).unwrap();
/// let outcome = rr.simulate(&[Process::new(1, 0, 3), Process::new(2, 0, 2)]);
/// assert_eq!(outcome.trace.as_slice(), &[1, 1, 2, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: Ticks,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given time quantum.
    ///
    /// Rejects `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self, ValidationError> {
        Self::with_quantum(validate_quantum(quantum)?)
    }

    /// Creates a scheduler from a quantum already expressed in ticks.
    ///
    /// Rejects `quantum == 0`.
    pub fn with_quantum(quantum: Ticks) -> Result<Self, ValidationError> {
        if quantum == 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantum,
                "Time quantum must be positive, got 0",
            ));
        }
        Ok(Self { quantum })
    }

    /// The configured time quantum.
    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

/// Moves every pending process with `arrival <= clock` to the ready queue.
fn admit(
    run: &[Process],
    order: &[usize],
    next: &mut usize,
    queue: &mut VecDeque<usize>,
    clock: Ticks,
) {
    while let Some(&idx) = order.get(*next) {
        if run[idx].arrival_time > clock {
            break;
        }
        trace!("t={clock} admit P{}", run[idx].id);
        queue.push_back(idx);
        *next += 1;
    }
}

impl CpuScheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn simulate(&self, processes: &[Process]) -> SimulationOutcome {
        info!(
            "running Round Robin (quantum={}) over {} processes",
            self.quantum,
            processes.len()
        );

        let mut run = fresh_copy(processes);
        let order = admission_order(&run);
        let mut first_dispatch: Vec<Option<Ticks>> = vec![None; run.len()];
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(run.len());
        let mut trace = ExecutionTrace::with_capacity(total_burst(&run) as usize);
        let mut next = 0;
        let mut clock: Ticks = 0;
        let mut total_waiting: Ticks = 0;

        loop {
            admit(&run, &order, &mut next, &mut queue, clock);

            let Some(idx) = queue.pop_front() else {
                match order.get(next) {
                    Some(&pending) => {
                        clock = run[pending].arrival_time;
                        trace!("t={clock} idle until next arrival");
                        continue;
                    }
                    None => break,
                }
            };

            let first = *first_dispatch[idx].get_or_insert(clock);
            let slice = self.quantum.min(run[idx].remaining_time);
            run[idx].remaining_time -= slice;
            trace.record(run[idx].id, slice);
            clock += slice;

            debug!(
                "P{} ran {slice} ticks to t={clock}, {} remaining",
                run[idx].id, run[idx].remaining_time
            );

            admit(&run, &order, &mut next, &mut queue, clock);

            let process = &mut run[idx];
            if process.remaining_time > 0 {
                queue.push_back(idx);
            } else {
                process.waiting_time = clock - first - process.burst_time;
                total_waiting += process.waiting_time;
                debug!("P{} finished at t={clock}, waited {}", process.id, process.waiting_time);
            }
        }

        let outcome = SimulationOutcome {
            algorithm: self.name(),
            processes: run,
            trace,
            total_waiting,
            completion_time: clock,
        };

        match outcome.average_waiting_time() {
            Some(avg) => info!("Round Robin: average waiting time = {avg:.2}"),
            None => info!("Round Robin: no processes, average waiting time undefined"),
        }
        outcome
    }
}
