//! Process model.
//!
//! A process is one simulated task competing for a single CPU. It carries
//! its static workload description (arrival, burst) plus the two fields a
//! simulator writes while it runs (waiting time, remaining time).
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Simulation clock unit.
pub type Ticks = u64;

/// Process identifier (1-based, assigned in generation order).
pub type ProcessId = u32;

/// A simulated process.
///
/// Each simulator works on its own clone of the process set, so the
/// mutable fields only ever describe a single algorithm's run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: Ticks,
    /// Total CPU ticks required to complete.
    pub burst_time: Ticks,
    /// Ticks spent ready but not running (written by a simulator).
    pub waiting_time: Ticks,
    /// Ticks still owed to the process (Round Robin bookkeeping).
    pub remaining_time: Ticks,
}

impl Process {
    /// Creates a process with no waiting time and a full remaining burst.
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            waiting_time: 0,
            remaining_time: burst_time,
        }
    }

    /// Clears run-scoped state so the process can be simulated again.
    pub fn reset(&mut self) {
        self.waiting_time = 0;
        self.remaining_time = self.burst_time;
    }

    /// Whether the process has received its whole burst.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }
}

/// Sum of burst times across a process set.
pub fn total_burst(processes: &[Process]) -> Ticks {
    processes.iter().map(|p| p.burst_time).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_new() {
        let p = Process::new(7, 3, 12);
        assert_eq!(p.id, 7);
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 12);
        assert_eq!(p.waiting_time, 0);
        assert_eq!(p.remaining_time, 12);
        assert!(!p.is_finished());
    }

    #[test]
    fn test_process_reset() {
        let mut p = Process::new(1, 0, 5);
        p.waiting_time = 9;
        p.remaining_time = 0;
        assert!(p.is_finished());

        p.reset();
        assert_eq!(p.waiting_time, 0);
        assert_eq!(p.remaining_time, 5);
    }

    #[test]
    fn test_total_burst() {
        let set = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        assert_eq!(total_burst(&set), 8);
        assert_eq!(total_burst(&[]), 0);
    }
}
