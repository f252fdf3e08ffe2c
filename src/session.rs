//! Scheduler session: one complete simulation run.
//!
//! Runs the phases in order: generate → FCFS → Round Robin → metrics.
//! Each simulator receives its own copy of the workload, so neither can
//! observe the other's bookkeeping.

use log::info;
use rand::Rng;

use crate::models::{Process, Ticks};
use crate::report::SimulationReport;
use crate::scheduler::{
    CpuScheduler, FcfsScheduler, RoundRobinScheduler, RunMetrics, SimulationOutcome,
    STARVATION_TARGET_PCT,
};
use crate::validation::{validate_workload, ValidationError};
use crate::workload::WorkloadGenerator;

/// Validated run parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSettings {
    /// Number of processes to generate.
    pub process_count: usize,
    /// Round Robin time quantum.
    pub quantum: Ticks,
}

/// Drives simulation runs with fixed settings.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::session::{SchedulerSession, SimulationSettings};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let session = SchedulerSession::new(SimulationSettings { process_count: 8, quantum: 4 });
/// let run = session.run(&mut StdRng::seed_from_u64(3)).unwrap();
/// assert_eq!(run.fcfs.trace.len(), run.rr.trace.len());
/// ```
#[derive(Debug, Clone)]
pub struct SchedulerSession {
    settings: SimulationSettings,
}

/// Everything produced by one run.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    /// The generated (or injected) workload, untouched by the simulators.
    pub workload: Vec<Process>,
    /// FCFS pass.
    pub fcfs: SimulationOutcome,
    /// Round Robin pass.
    pub rr: SimulationOutcome,
    /// Comparative metrics.
    pub metrics: RunMetrics,
}

impl SchedulerSession {
    /// Creates a session.
    pub fn new(settings: SimulationSettings) -> Self {
        Self { settings }
    }

    /// Session settings.
    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Generates a workload from `rng` and simulates it.
    pub fn run<R: Rng>(&self, rng: &mut R) -> Result<SimulationRun, ValidationError> {
        let generator = WorkloadGenerator::new(self.settings.process_count as i64)?;
        let workload = generator.generate(rng);
        self.run_with_workload(workload)
    }

    /// Simulates a caller-supplied workload.
    ///
    /// Returns the first structural problem found in the workload.
    pub fn run_with_workload(
        &self,
        workload: Vec<Process>,
    ) -> Result<SimulationRun, ValidationError> {
        let round_robin = RoundRobinScheduler::with_quantum(self.settings.quantum)?;
        if let Err(mut errors) = validate_workload(&workload) {
            return Err(errors.remove(0));
        }

        let fcfs = FcfsScheduler.simulate(&workload);
        let rr = round_robin.simulate(&workload);

        info!("calculating performance metrics");
        let metrics = RunMetrics::calculate(&fcfs, &rr);

        Ok(SimulationRun {
            workload,
            fcfs,
            rr,
            metrics,
        })
    }
}

impl SimulationRun {
    /// Builds the format-agnostic report handed to the result sink.
    pub fn report(&self) -> SimulationReport {
        SimulationReport::new(&self.metrics, &self.fcfs.trace, &self.rr.trace)
    }

    /// Human-readable metric summary, one line per metric.
    pub fn summary_lines(&self) -> Vec<String> {
        let m = &self.metrics;
        let mut lines = vec![
            format!("CPU Utilization: {:.2}%", m.cpu_utilization),
            format!(
                "FCFS Average Waiting Time: {}",
                fmt_metric(m.avg_waiting_time_fcfs, 2)
            ),
            format!(
                "Round Robin Average Waiting Time: {}",
                fmt_metric(m.avg_waiting_time_rr, 2)
            ),
            format!(
                "Throughput: {} processes/tick",
                fmt_metric(m.throughput, 5)
            ),
            format!(
                "Starvation Reduction (RR vs FCFS): {}",
                m.starvation_reduction
                    .map(|r| format!("{r:.2}%"))
                    .unwrap_or_else(|| "not applicable".to_string())
            ),
        ];

        if m.starvation_reduction.is_some() {
            let verdict = if m.meets_starvation_target(STARVATION_TARGET_PCT) {
                "meets"
            } else {
                "is below"
            };
            lines.push(format!(
                "Round Robin {verdict} the {STARVATION_TARGET_PCT:.0}% starvation reduction target"
            ));
        }
        lines
    }
}

fn fmt_metric(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{v:.precision$}"),
        None => "undefined".to_string(),
    }
}
