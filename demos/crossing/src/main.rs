//! crossing: drive one four-way intersection through a full event run.
//!
//! Builds the standard twelve-lane intersection, seeds an event queue from a
//! rate CSV, an explicit arrival CSV, or a uniform built-in rate, then pops
//! events until Termination.  No signal policy is applied: the run shows the
//! event stream and how arrivals accumulate per lane.
//!
//! ```text
//! crossing --horizon 120 --seed 7 --rate 40
//! crossing --rates rates.csv --trace-dir output/crossing
//! crossing --arrivals arrivals.csv --peek 10
//! ```

mod dispatch;
mod logging;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use ix_arrivals::{ArrivalGenerator, RateMatrix, load_arrivals_csv, load_rates_csv};
use ix_core::{LanePair, SimConfig};
use ix_intersection::Intersection;
use ix_output::CsvTraceWriter;
use ix_queue::EventQueue;

/// Exits per approach lane in the built-in rate matrix.
const DEFAULT_EXITS: u32 = 4;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "crossing", about = "Discrete-event run of a four-way intersection")]
struct Args {
    /// Simulated minutes until termination.
    #[arg(long, default_value_t = 60.0)]
    horizon: f64,

    /// RNG seed for Poisson arrival generation.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Rate matrix CSV (`from,to,rate_per_hour`).
    #[arg(long, conflicts_with = "arrivals")]
    rates: Option<PathBuf>,

    /// Explicit arrival schedule CSV (`time,from,to`).
    #[arg(long)]
    arrivals: Option<PathBuf>,

    /// Uniform vehicles/hour for every lane pair when no CSV is given.
    #[arg(long, default_value_t = 30.0)]
    rate: f64,

    /// Print the first N queued events before running.
    #[arg(long)]
    peek: Option<usize>,

    /// Write `events.csv` with every dispatched event to this directory.
    #[arg(long)]
    trace_dir: Option<PathBuf>,

    /// Debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(if args.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO })?;

    let config = SimConfig { horizon_minutes: args.horizon, seed: args.seed };
    let horizon = config.horizon()?;
    let mut rng = config.make_rng();

    // 1. Intersection state.
    let mut intersection = Intersection::standard();
    info!(lanes = intersection.lanes.len(), "intersection built");

    // 2. Arrival source.
    let generator = arrival_source(&args, intersection.lanes.len() as u32)?;

    // 3. Seeded queue.
    let mut queue = EventQueue::from_generator(horizon, &generator, &mut rng)?;
    println!("Queued {} events (horizon {horizon} min, seed {})", queue.len(), config.seed);
    if let Some(n) = args.peek {
        for event in queue.peek_first_n(n) {
            println!("  {event}");
        }
    }
    println!();

    // 4. Trace output.
    let mut trace = match &args.trace_dir {
        Some(dir) => Some(open_trace(dir)?),
        None => None,
    };

    // 5. Run.
    let t0 = Instant::now();
    let summary = dispatch::run(&mut queue, &mut intersection, &mut trace)?;
    let elapsed = t0.elapsed();

    // 6. Summary.
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  arrivals {}  departures {}  phase ends {}  skipped {}",
        summary.arrivals, summary.departures, summary.phase_ends, summary.skipped
    );
    match summary.terminated_at {
        Some(at) => println!("  terminated at {at} min, {} events left pending", queue.len()),
        None => println!("  queue drained without a Termination event"),
    }
    println!();

    println!("{:<6} {:<8} {:<8} {:<8} {:<10}", "Lane", "Type", "Waiting", "Departed", "Mean wait");
    println!("{}", "-".repeat(44));
    for lane in &intersection.lanes {
        let mean_wait = lane.mean_wait().map_or_else(|| "-".to_string(), |w| format!("{w:.2}"));
        println!(
            "{:<6} {:<8} {:<8} {:<8} {:<10}",
            lane.id, lane.lane_type, lane.cars_waiting, lane.cars_departed, mean_wait
        );
    }

    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn arrival_source(args: &Args, lanes: u32) -> Result<ArrivalGenerator> {
    if let Some(path) = &args.arrivals {
        let records = load_arrivals_csv(path)
            .with_context(|| format!("loading arrivals from {}", path.display()))?;
        return Ok(ArrivalGenerator::Schedule(records));
    }
    if let Some(path) = &args.rates {
        let rates = load_rates_csv(path)
            .with_context(|| format!("loading rates from {}", path.display()))?;
        return Ok(ArrivalGenerator::Rates(rates));
    }

    let mut rates = RateMatrix::zeros(lanes as usize, DEFAULT_EXITS as usize);
    for from in 0..lanes {
        for to in 0..DEFAULT_EXITS {
            rates.set(LanePair::new(from, to), args.rate)?;
        }
    }
    Ok(ArrivalGenerator::Rates(rates))
}

fn open_trace(dir: &Path) -> Result<CsvTraceWriter> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    Ok(CsvTraceWriter::new(dir)?)
}
