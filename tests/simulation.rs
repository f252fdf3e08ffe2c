//! End-to-end runs: configuration → session → result sink.

use std::fs;
use std::path::PathBuf;

use cpu_sched_sim::config::{Config, OutputFormat};
use cpu_sched_sim::models::{total_burst, Process};
use cpu_sched_sim::report::{ResultSink, SimulationReport};
use cpu_sched_sim::session::SchedulerSession;
use cpu_sched_sim::workload::{ARRIVAL_WINDOW, BURST_RANGE};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn temp_stem(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cpu-sched-sim-{}-{name}", std::process::id()))
}

fn session_for(config: &Config) -> SchedulerSession {
    SchedulerSession::new(config.settings().unwrap())
}

#[test]
fn test_default_run_properties() {
    let config = Config::default();
    let run = session_for(&config)
        .run(&mut StdRng::seed_from_u64(17))
        .unwrap();

    assert_eq!(run.workload.len(), 50);
    for p in &run.workload {
        assert!(ARRIVAL_WINDOW.contains(&p.arrival_time));
        assert!(BURST_RANGE.contains(&p.burst_time));
    }

    let burst = total_burst(&run.workload) as usize;
    assert_eq!(run.fcfs.trace.len(), burst);
    assert_eq!(run.rr.trace.len(), burst);
    assert!(run.rr.processes.iter().all(|p| p.remaining_time == 0));

    // Each process holds the CPU for exactly its burst in both traces
    for p in &run.workload {
        assert_eq!(run.fcfs.trace.ticks_for(p.id), p.burst_time);
        assert_eq!(run.rr.trace.ticks_for(p.id), p.burst_time);
    }
}

#[test]
fn test_seeded_runs_render_identically() {
    let config = Config {
        process_count: 25,
        time_quantum: 3,
        ..Config::default()
    };
    let session = session_for(&config);

    let a = session.run(&mut StdRng::seed_from_u64(8)).unwrap().report();
    let b = session.run(&mut StdRng::seed_from_u64(8)).unwrap().report();

    assert_eq!(a, b);
    assert_eq!(a.to_csv().unwrap(), b.to_csv().unwrap());
    assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
}

#[test]
fn test_json_file_round_trip() {
    let config = Config {
        process_count: 3,
        ..Config::default()
    };
    let run = session_for(&config)
        .run_with_workload(vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ])
        .unwrap();

    let sink = ResultSink::new(OutputFormat::Json, temp_stem("json"));
    let path = sink.write(&run.report()).unwrap();
    assert_eq!(path.extension().unwrap(), "json");

    let written: SimulationReport =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(written.gantt_chart_fcfs, vec![1, 1, 1, 1, 1, 2, 2, 2, 3]);
    assert_eq!(written.gantt_chart_rr, vec![1, 1, 1, 1, 2, 2, 2, 3, 1]);
    assert!((written.metrics.starvation_reduction.unwrap() - 60.0).abs() < 1e-9);
}

#[test]
fn test_csv_file_with_fallback_format() {
    let config = Config {
        process_count: 1,
        output_format: "yaml".to_string(),
        ..Config::default()
    };
    assert_eq!(config.output_format(), OutputFormat::Csv);

    let run = session_for(&config)
        .run_with_workload(vec![Process::new(1, 4, 3)])
        .unwrap();

    let sink = ResultSink::new(config.output_format(), temp_stem("csv"));
    let path = sink.write(&run.report()).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).ok();

    assert!(contents.starts_with("Metric,FCFS,RoundRobin"));
    assert!(contents.contains("Avg Waiting Time,0.00,0.00"));
    assert!(contents.contains("Starvation Reduction,N/A,N/A"));
    assert!(contents.contains("Gantt Chart (RR):,P1,P1,P1"));
}

#[test]
fn test_invalid_configuration_aborts_before_simulation() {
    let config = Config {
        time_quantum: -1,
        ..Config::default()
    };
    let err = config.settings().unwrap_err();
    assert!(err.is_configuration_error());
    assert!(err.to_string().contains("quantum"));
}
