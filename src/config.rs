//! Simulator configuration.
//!
//! Command-line flags with environment variable fallbacks.
//!
//! ## CLI
//! ```bash
//! cpu-sched-sim --num-processes 100 --time-quantum 3 --output-format json
//! ```
//!
//! ## Environment
//! ```bash
//! SCHED_NUM_PROCESSES=10 SCHED_SEED=42 cpu-sched-sim
//! ```

use std::fmt;
use std::path::PathBuf;

use clap::Parser;
use log::warn;

use crate::session::SimulationSettings;
use crate::validation::{validate_process_count, validate_quantum, ValidationError};

/// Default number of generated processes.
pub const DEFAULT_PROCESS_COUNT: i64 = 50;

/// Default Round Robin quantum.
pub const DEFAULT_TIME_QUANTUM: i64 = 4;

/// Default output path stem; the extension follows the output format.
pub const DEFAULT_OUTPUT_STEM: &str = "simulation_results";

/// Result serialization format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma-separated metrics table plus Gantt rows.
    #[default]
    Csv,
    /// JSON rendering of the full report.
    Json,
}

impl OutputFormat {
    /// Parses a format name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Parses a format name, falling back to the default with a warning.
    pub fn parse_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            let fallback = Self::default();
            warn!("invalid output format '{name}', using default '{fallback}'");
            fallback
        })
    }

    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Simulator configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "cpu-sched-sim")]
#[command(about = "Compare FCFS and Round Robin scheduling over a synthetic workload")]
#[command(version)]
pub struct Config {
    /// Number of processes to generate
    #[arg(
        short = 'n',
        long = "num-processes",
        alias = "num_processes",
        default_value_t = DEFAULT_PROCESS_COUNT,
        allow_negative_numbers = true,
        env = "SCHED_NUM_PROCESSES"
    )]
    pub process_count: i64,

    /// Round Robin time quantum in ticks
    #[arg(
        short = 'q',
        long = "time-quantum",
        alias = "time_quantum",
        default_value_t = DEFAULT_TIME_QUANTUM,
        allow_negative_numbers = true,
        env = "SCHED_TIME_QUANTUM"
    )]
    pub time_quantum: i64,

    /// Output format (csv or json); unknown values fall back to csv
    #[arg(
        short = 'f',
        long = "output-format",
        alias = "output_format",
        default_value = "csv",
        env = "SCHED_OUTPUT_FORMAT"
    )]
    pub output_format: String,

    /// Output path stem; the extension is added from the format
    #[arg(short, long, default_value = DEFAULT_OUTPUT_STEM, env = "SCHED_OUTPUT")]
    pub output: PathBuf,

    /// Fixed random seed (seeded from the clock when absent)
    #[arg(long, env = "SCHED_SEED")]
    pub seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Validates the numeric settings.
    ///
    /// Returns the first configuration error found.
    pub fn settings(&self) -> Result<SimulationSettings, ValidationError> {
        Ok(SimulationSettings {
            process_count: validate_process_count(self.process_count)?,
            quantum: validate_quantum(self.time_quantum)?,
        })
    }

    /// The requested output format, with fallback for unknown names.
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::parse_or_default(&self.output_format)
    }

    /// Log level implied by `-v` flags.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            process_count: DEFAULT_PROCESS_COUNT,
            time_quantum: DEFAULT_TIME_QUANTUM,
            output_format: OutputFormat::default().to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT_STEM),
            seed: None,
            verbose: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    const ENV_OVERRIDES: [&str; 5] = [
        "SCHED_NUM_PROCESSES",
        "SCHED_TIME_QUANTUM",
        "SCHED_OUTPUT_FORMAT",
        "SCHED_OUTPUT",
        "SCHED_SEED",
    ];

    /// Parses `args` with the `SCHED_*` environment cleared, so only the
    /// command line and built-in defaults apply.
    fn parse(args: &[&str]) -> Config {
        for name in ENV_OVERRIDES {
            std::env::remove_var(name);
        }
        Config::try_parse_from(std::iter::once("cpu-sched-sim").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        for name in ENV_OVERRIDES {
            assert!(std::env::var_os(name).is_none());
        }
        assert_eq!(config.process_count, 50);
        assert_eq!(config.time_quantum, 4);
        assert_eq!(config.output_format(), OutputFormat::Csv);
        assert_eq!(config.output, PathBuf::from("simulation_results"));
        assert_eq!(config.log_level(), log::LevelFilter::Info);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_flags() {
        let config = parse(&[
            "--num-processes",
            "10",
            "-q",
            "2",
            "--output-format",
            "json",
            "--seed",
            "7",
            "-vv",
        ]);
        let settings = config.settings().unwrap();
        assert_eq!(settings.process_count, 10);
        assert_eq!(settings.quantum, 2);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.log_level(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_legacy_underscore_aliases() {
        let config = parse(&["--num_processes", "3", "--time_quantum", "5"]);
        assert_eq!(config.process_count, 3);
        assert_eq!(config.time_quantum, 5);
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let config = parse(&["--num-processes", "-5"]);
        let err = config.settings().unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NonPositiveProcessCount);

        let config = parse(&["--time-quantum", "0"]);
        let err = config.settings().unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NonPositiveQuantum);
    }

    #[test]
    fn test_invalid_format_falls_back() {
        let config = parse(&["--output-format", "xml"]);
        assert_eq!(config.output_format(), OutputFormat::Csv);
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name(" csv "), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::from_name("yaml"), None);
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_default_config_is_valid() {
        let settings = Config::default().settings().unwrap();
        assert_eq!(settings.process_count, 50);
        assert_eq!(settings.quantum, 4);
    }
}
