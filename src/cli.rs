use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{debug, info, Level};

use crate::defaults::{DEFAULT_BATCH_SIZE, DEFAULT_FIBONACCI_N, DEFAULT_REPETITIONS};
use crate::fibonacci::{fibonacci, label, MAX_EXACT_N};
use crate::quicksort::{sort, verify_sorted};
use crate::random::{generate, generate_from_entropy, Xoroshiro128Plus};
use crate::stats::aggregate_durations;
use crate::timing::{finished_line, timed};

/// Compute a fibonacci number by naive double recursion
#[derive(Parser, Debug)]
#[command(version, name = "fib")]
pub struct FibCli {
    /// Increase verbosity level (can be specified multiple times.) The first level sets level
    /// "info", second sets level "debug", and third sets level "trace" for the logger.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Index of the fibonacci number to compute
    #[arg(short, long, value_parser=clap::value_parser!(u64).range(0..=MAX_EXACT_N), default_value_t = DEFAULT_FIBONACCI_N)]
    pub nth: u64,
}

/// Sort random 64-bit integers with quicksort and report the sort time
#[derive(Parser, Debug)]
#[command(version, name = "sort")]
pub struct SortCli {
    /// Increase verbosity level (can be specified multiple times.) The first level sets level
    /// "info", second sets level "debug", and third sets level "trace" for the logger.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Number of random integers to generate and sort
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Seed for a reproducible input sequence. Without it, fresh entropy is used.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Repetitions, each with newly generated input
    #[arg(short, long, value_parser=clap::value_parser!(u16).range(1..), default_value_t = DEFAULT_REPETITIONS)]
    pub repetitions: u16,

    /// Check the result is sorted after each run (not included in the reported time)
    #[arg(long)]
    pub verify: bool,
}

fn init_logging(verbose: u8) {
    let logger_level = match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(logger_level.as_str())).init();
}

pub fn handle_fib() -> Result<()> {
    let cli = FibCli::parse();
    init_logging(cli.verbose);
    run_fib(&cli, &mut io::stdout().lock())
}

pub fn handle_sort() -> Result<()> {
    let cli = SortCli::parse();
    init_logging(cli.verbose);
    run_sort(&cli, &mut io::stdout().lock())
}

pub fn run_fib(cli: &FibCli, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", label(cli.nth))?;
    out.flush()?;

    let (value, elapsed) = timed(|| fibonacci(cli.nth));
    info!("fibonacci({}) took {:?}", cli.nth, elapsed);

    writeln!(out, "{value}")?;
    Ok(())
}

pub fn run_sort(cli: &SortCli, out: &mut impl Write) -> Result<()> {
    let mut rng = cli.seed.map(Xoroshiro128Plus::seed_from);
    let mut sort_times = Vec::with_capacity(cli.repetitions.into());

    for repetition in 0..cli.repetitions {
        let (mut xs, generation_time) = timed(|| match rng.as_mut() {
            Some(rng) => generate(cli.batch_size, rng),
            None => generate_from_entropy(cli.batch_size),
        });
        debug!(
            "Repetition {}: generated {} integers in {:?}",
            repetition + 1,
            xs.len(),
            generation_time
        );

        let ((), sort_time) = timed(|| sort(&mut xs));
        writeln!(out, "{}", finished_line(sort_time))?;
        info!(
            "Sorted {} integers in {:?}, {:?} including generation",
            xs.len(),
            sort_time,
            generation_time + sort_time
        );

        if cli.verify {
            verify_sorted(&xs)?;
            debug!("Verified sort order of {} integers", xs.len());
        }

        sort_times.push(sort_time);
    }

    if sort_times.len() > 1 {
        info!("Sort phase: {}", aggregate_durations(sort_times.into_iter()));
    }

    Ok(())
}
