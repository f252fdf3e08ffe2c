//! Run quality metrics (KPIs).
//!
//! Compares an FCFS pass and a Round Robin pass over the same workload.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | CPU Utilization | Fixed at 100% (busy-only traces, simplifying assumption) |
//! | Avg Waiting Time | Mean waiting ticks per process, per discipline |
//! | Throughput | Processes / total busy ticks of the FCFS trace |
//! | Starvation Reduction | (avg_fcfs - avg_rr) / avg_fcfs × 100 |
//!
//! Ratios with a zero denominator are reported as undefined (`None`),
//! never as NaN or infinity.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use std::fmt;

use log::warn;

use super::SimulationOutcome;
use crate::models::ExecutionTrace;

/// Utilization reported for every run.
///
/// Traces only record busy ticks, so idle gaps are never charged.
pub const CPU_UTILIZATION_PCT: f64 = 100.0;

/// Starvation reduction (%) considered a meaningful improvement of RR over FCFS.
pub const STARVATION_TARGET_PCT: f64 = 30.0;

/// A metric whose defining ratio has a zero denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateMetric {
    /// Throughput over an empty trace.
    EmptyTrace,
    /// Starvation reduction against a zero FCFS waiting baseline.
    ZeroBaseline,
    /// An average waiting time was itself undefined (empty workload).
    NoData,
}

impl fmt::Display for DegenerateMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTrace => f.write_str("throughput undefined: FCFS trace is empty"),
            Self::ZeroBaseline => {
                f.write_str("starvation reduction not applicable: FCFS average waiting time is 0")
            }
            Self::NoData => f.write_str("metric undefined: no processes were simulated"),
        }
    }
}

impl std::error::Error for DegenerateMetric {}

/// Run performance indicators.
///
/// `None` marks a value that is undefined for this run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunMetrics {
    /// CPU utilization (%).
    pub cpu_utilization: f64,
    /// Average FCFS waiting time (ticks).
    pub avg_waiting_time_fcfs: Option<f64>,
    /// Average Round Robin waiting time (ticks).
    pub avg_waiting_time_rr: Option<f64>,
    /// Completed processes per busy tick.
    pub throughput: Option<f64>,
    /// Relative waiting-time improvement of RR over FCFS (%).
    pub starvation_reduction: Option<f64>,
}

impl RunMetrics {
    /// Computes metrics from the two passes.
    ///
    /// # Arguments
    /// * `fcfs` - Outcome of the FCFS pass (throughput baseline).
    /// * `rr` - Outcome of the Round Robin pass over the same workload.
    pub fn calculate(fcfs: &SimulationOutcome, rr: &SimulationOutcome) -> Self {
        let avg_fcfs = fcfs.average_waiting_time();
        let avg_rr = rr.average_waiting_time();

        let throughput = throughput(fcfs.process_count(), &fcfs.trace)
            .map_err(|e| warn!("{e}"))
            .ok();

        let starvation_reduction = match (avg_fcfs, avg_rr) {
            (Some(base), Some(improved)) => starvation_reduction(base, improved),
            _ => Err(DegenerateMetric::NoData),
        }
        .map_err(|e| warn!("{e}"))
        .ok();

        Self {
            cpu_utilization: CPU_UTILIZATION_PCT,
            avg_waiting_time_fcfs: avg_fcfs,
            avg_waiting_time_rr: avg_rr,
            throughput,
            starvation_reduction,
        }
    }

    /// Whether RR reduced average waiting by at least `min_reduction_pct`.
    ///
    /// An undefined reduction never meets a target.
    pub fn meets_starvation_target(&self, min_reduction_pct: f64) -> bool {
        self.starvation_reduction
            .is_some_and(|r| r >= min_reduction_pct)
    }
}

/// Processes completed per busy tick of `trace`.
pub fn throughput(process_count: usize, trace: &ExecutionTrace) -> Result<f64, DegenerateMetric> {
    if trace.is_empty() {
        return Err(DegenerateMetric::EmptyTrace);
    }
    Ok(process_count as f64 / trace.busy_ticks() as f64)
}

/// Percentage by which `avg_rr` improves on `avg_fcfs`.
///
/// Negative when RR waits longer than FCFS.
pub fn starvation_reduction(avg_fcfs: f64, avg_rr: f64) -> Result<f64, DegenerateMetric> {
    if avg_fcfs == 0.0 {
        return Err(DegenerateMetric::ZeroBaseline);
    }
    Ok((avg_fcfs - avg_rr) / avg_fcfs * 100.0)
}
