use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cpu_sched_sim::config::Config;
use cpu_sched_sim::report::ResultSink;
use cpu_sched_sim::session::SchedulerSession;

fn init_logging(level: log::LevelFilter) -> Result<()> {
    let mut lcfg = simplelog::ConfigBuilder::new();
    lcfg.set_time_level(simplelog::LevelFilter::Off)
        .set_location_level(simplelog::LevelFilter::Off)
        .set_target_level(simplelog::LevelFilter::Off)
        .set_thread_level(simplelog::LevelFilter::Off);
    simplelog::TermLogger::init(
        level,
        lcfg.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.log_level())?;

    let settings = config.settings().context("invalid configuration")?;
    let format = config.output_format();

    let seed = config.seed.unwrap_or_else(clock_seed);
    info!(
        "simulating {} processes, quantum {}, seed {seed}",
        settings.process_count, settings.quantum
    );
    let mut rng = StdRng::seed_from_u64(seed);

    let run = SchedulerSession::new(settings)
        .run(&mut rng)
        .context("simulation aborted")?;

    info!("Metrics:");
    for line in run.summary_lines() {
        info!("  {line}");
    }

    let path = ResultSink::new(format, &config.output)
        .write(&run.report())
        .context("failed to save results")?;
    info!("Results saved to {}", path.display());

    Ok(())
}
