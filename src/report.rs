//! Simulation report and result sink.
//!
//! `SimulationReport` is the format-agnostic record of a run. The
//! `ResultSink` renders it as CSV or JSON; the format is chosen by the
//! caller when the sink is built.
//!
//! # CSV layout
//!
//! ```text
//! Metric,FCFS,RoundRobin
//! CPU Utilization,100.00,100.00
//! Avg Waiting Time,3.33,1.33
//! Throughput,0.33333,0.33333
//! Starvation Reduction,60.00,N/A
//! Gantt Chart (FCFS):,P1,P1,...
//! Gantt Chart (RR):,P1,P1,...
//! ```
//!
//! Undefined metrics are written as `N/A` in CSV and `null` in JSON.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::OutputFormat;
use crate::models::{ExecutionTrace, ProcessId};
use crate::scheduler::RunMetrics;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Placeholder for undefined values in CSV output.
pub const NOT_APPLICABLE: &str = "N/A";

/// Metric block of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetrics {
    #[serde(rename = "cpuUtilization")]
    pub cpu_utilization: f64,
    #[serde(rename = "avgWaitingTimeFCFS")]
    pub avg_waiting_time_fcfs: Option<f64>,
    #[serde(rename = "avgWaitingTimeRR")]
    pub avg_waiting_time_rr: Option<f64>,
    pub throughput: Option<f64>,
    #[serde(rename = "starvationReduction")]
    pub starvation_reduction: Option<f64>,
}

/// Format-agnostic record of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub metrics: ReportMetrics,
    #[serde(rename = "ganttChartFCFS")]
    pub gantt_chart_fcfs: Vec<ProcessId>,
    #[serde(rename = "ganttChartRR")]
    pub gantt_chart_rr: Vec<ProcessId>,
}

impl From<&RunMetrics> for ReportMetrics {
    fn from(m: &RunMetrics) -> Self {
        Self {
            cpu_utilization: m.cpu_utilization,
            avg_waiting_time_fcfs: m.avg_waiting_time_fcfs,
            avg_waiting_time_rr: m.avg_waiting_time_rr,
            throughput: m.throughput,
            starvation_reduction: m.starvation_reduction,
        }
    }
}

impl SimulationReport {
    /// Builds a report from computed metrics and both traces.
    pub fn new(metrics: &RunMetrics, fcfs: &ExecutionTrace, rr: &ExecutionTrace) -> Self {
        Self {
            metrics: metrics.into(),
            gantt_chart_fcfs: fcfs.as_slice().to_vec(),
            gantt_chart_rr: rr.as_slice().to_vec(),
        }
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// Renders the report as CSV.
    pub fn to_csv(&self) -> Result<String, csv::Error> {
        let mut buf = Vec::new();
        {
            let mut wtr = csv::WriterBuilder::new()
                .flexible(true)
                .from_writer(&mut buf);
            let m = &self.metrics;

            let utilization = fmt_value(Some(m.cpu_utilization), 2);
            let throughput = fmt_value(m.throughput, 5);

            wtr.write_record(["Metric", "FCFS", "RoundRobin"])?;
            wtr.write_record([
                "CPU Utilization",
                utilization.as_str(),
                utilization.as_str(),
            ])?;
            wtr.write_record([
                "Avg Waiting Time",
                fmt_value(m.avg_waiting_time_fcfs, 2).as_str(),
                fmt_value(m.avg_waiting_time_rr, 2).as_str(),
            ])?;
            wtr.write_record(["Throughput", throughput.as_str(), throughput.as_str()])?;
            // Single-sided: reduction is RR measured against the FCFS baseline.
            wtr.write_record([
                "Starvation Reduction",
                fmt_value(m.starvation_reduction, 2).as_str(),
                NOT_APPLICABLE,
            ])?;
            wtr.write_record(gantt_row("Gantt Chart (FCFS):", &self.gantt_chart_fcfs))?;
            wtr.write_record(gantt_row("Gantt Chart (RR):", &self.gantt_chart_rr))?;
            wtr.flush()?;
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Renders the report in `format`.
    pub fn render(&self, format: OutputFormat) -> Result<String, ValidationError> {
        match format {
            OutputFormat::Csv => self.to_csv().map_err(|e| render_failure(format, e)),
            OutputFormat::Json => self.to_json().map_err(|e| render_failure(format, e)),
        }
    }
}

fn render_failure(format: OutputFormat, err: impl std::fmt::Display) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::RenderFailure,
        format!("Failed to render {format} report: {err}"),
    )
}

fn fmt_value(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{v:.precision$}"),
        None => NOT_APPLICABLE.to_string(),
    }
}

fn gantt_row(label: &str, ids: &[ProcessId]) -> Vec<String> {
    std::iter::once(label.to_string())
        .chain(ids.iter().map(|id| format!("P{id}")))
        .collect()
}

/// Writes reports to `<stem>.<format extension>`.
#[derive(Debug, Clone)]
pub struct ResultSink {
    format: OutputFormat,
    stem: PathBuf,
}

impl ResultSink {
    /// Creates a sink for the given format and output path stem.
    pub fn new(format: OutputFormat, stem: impl Into<PathBuf>) -> Self {
        Self {
            format,
            stem: stem.into(),
        }
    }

    /// Output format of this sink.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Destination file path: the stem with the format extension appended.
    ///
    /// Dots already in the stem are kept (`results.v2` → `results.v2.csv`).
    pub fn path(&self) -> PathBuf {
        let mut path = self.stem.clone().into_os_string();
        path.push(".");
        path.push(self.format.extension());
        PathBuf::from(path)
    }

    /// Renders and writes the report, returning the written path.
    pub fn write(&self, report: &SimulationReport) -> Result<PathBuf, ValidationError> {
        let path = self.path();
        info!("writing {} results to {}", self.format, path.display());

        let rendered = report.render(self.format)?;
        write_file(&path, &rendered)?;
        Ok(path)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), ValidationError> {
    fs::write(path, contents).map_err(|e| {
        ValidationError::new(
            ValidationErrorKind::UnwritableOutput,
            format!("Cannot write results to {}: {e}", path.display()),
        )
    })
}
