//! Synthetic workload generation.
//!
//! Produces a process set with uniformly random arrival and burst times.
//! The random source is always supplied by the caller, so runs are
//! reproducible whenever the caller seeds it.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::workload::WorkloadGenerator;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let generator = WorkloadGenerator::new(10).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let processes = generator.generate(&mut rng);
//! assert_eq!(processes.len(), 10);
//! assert_eq!(processes[0].id, 1);
//! ```

use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;

use crate::models::{Process, ProcessId, Ticks};
use crate::validation::{validate_process_count, ValidationError};

/// Arrival ticks are drawn from this window.
pub const ARRIVAL_WINDOW: RangeInclusive<Ticks> = 0..=49;

/// Burst lengths are drawn from this range.
pub const BURST_RANGE: RangeInclusive<Ticks> = 1..=20;

/// Generates synthetic process sets of a fixed size.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    ///
    /// Rejects `count <= 0` before anything is generated.
    pub fn new(count: i64) -> Result<Self, ValidationError> {
        let count = validate_process_count(count)?;
        Ok(Self { count })
    }

    /// Number of processes per generated set.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Generates a process set.
    ///
    /// IDs run from 1 to `count` in generation order. Arrival times are
    /// uniform over [`ARRIVAL_WINDOW`], burst times over [`BURST_RANGE`].
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let processes: Vec<Process> = (1..=self.count)
            .map(|i| {
                let arrival = rng.random_range(ARRIVAL_WINDOW);
                let burst = rng.random_range(BURST_RANGE);
                Process::new(i as ProcessId, arrival, burst)
            })
            .collect();

        debug!("generated {} processes", processes.len());
        processes
    }
}
