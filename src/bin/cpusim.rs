//! `cpusim`: run one CPU scheduling simulation and print the report.
//!
//! ```text
//! cpusim <request.json | ->
//! cpusim --random <count> <algorithm> [quantum] [seed]
//! ```
//!
//! Environment variables:
//! - RUST_LOG: log level (default: info)
//! - CPUSIM_LOG_JSON: emit JSON log lines (default: false)

use std::io::Read;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cpu_sched_sim::report;
use cpu_sched_sim::workload::WorkloadGenerator;
use cpu_sched_sim::SimulationRequest;

const USAGE: &str = "usage: cpusim <request.json | ->\n       cpusim --random <count> <algorithm> [quantum] [seed]";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("CPUSIM_LOG_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn read_request(path: &str) -> Result<SimulationRequest> {
    let json = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?
    };
    Ok(SimulationRequest::from_json(&json)?)
}

fn random_request(args: &[String]) -> Result<SimulationRequest> {
    let (count, algorithm) = match args {
        [count, algorithm, ..] => (count, algorithm),
        _ => bail!("{USAGE}"),
    };
    let count: usize = count.parse().context("process count")?;
    let quantum = args
        .get(2)
        .map(|q| q.parse::<i64>())
        .transpose()
        .context("quantum")?;
    let seed = args
        .get(3)
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("seed")?
        .unwrap_or(0);

    let mut rng = StdRng::seed_from_u64(seed);
    let processes = WorkloadGenerator::new(count).generate(&mut rng);
    info!(count, seed, "generated random workload");

    Ok(SimulationRequest {
        processes,
        algorithm: algorithm.clone(),
        quantum,
    })
}

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let request = match args.as_slice() {
        [flag, rest @ ..] if flag == "--random" => random_request(rest)?,
        [path] => read_request(path)?,
        _ => bail!("{USAGE}"),
    };

    let outcome = request.run()?;
    print!("{}", report::render(&outcome));
    Ok(())
}
