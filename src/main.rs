//! Sorting demonstration.
//!
//! Prints the input, then every selected algorithm's output together with the number of
//! comparisons it needed.
//!
//! ```bash
//! # The classic demonstration input
//! bubblesort
//!
//! # Own values, bubble sort only, with pass and swap counts
//! bubblesort --algorithm bubble --stats 5 4 3 2 1
//!
//! # A generated pattern, reproducible through its seed
//! bubblesort --pattern saw_mixed --size 32 --seed 42
//!
//! # Floats go through the fallible sort, NaN is rejected
//! bubblesort --float 2.5 NaN 1
//! ```

use std::cell::Cell;
use std::env;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use bubblesort::{patterns, stable, unstable, Sort};

#[derive(Parser)]
#[command(name = "bubblesort")]
#[command(version, about = "Sort a sequence with bubble sort and compare it to other sorts")]
struct Cli {
    /// Values to sort. Defaults to the demonstration input.
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,

    /// Generate the input from a named pattern instead of VALUES.
    #[arg(short, long, conflicts_with = "values")]
    pattern: Option<String>,

    /// Length of a generated input.
    #[arg(short, long, default_value_t = 16)]
    size: usize,

    /// Seed for random patterns.
    #[arg(long)]
    seed: Option<u64>,

    /// Which algorithm to run.
    #[arg(short, long, value_enum, default_value_t = Algorithm::All)]
    algorithm: Algorithm,

    /// Parse VALUES as floats and sort them with the fallible bubble sort. Only bubble sort
    /// handles partially ordered input, so this excludes --algorithm and --stats.
    #[arg(long, conflicts_with_all = ["pattern", "algorithm", "stats"])]
    float: bool,

    /// Also print bubble sort pass, comparison and swap counts.
    #[arg(long)]
    stats: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    All,
    Bubble,
    Merge,
    Quicksort,
    StdStable,
    StdUnstable,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            &env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default(),
        ))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(seed) = cli.seed {
        // Nothing has drawn from the seed yet, so this always takes.
        patterns::set_seed(seed);
    }

    if cli.float {
        run_float(&cli.values)?;
        return Ok(());
    }

    let input = input_values(&cli)?;
    if cli.pattern.is_some() {
        info!(seed = patterns::random_init_seed(), len = input.len(), "generated input");
    }

    println!("Original: {input:?}");

    match cli.algorithm {
        Algorithm::All => {
            run_sort::<stable::bubble::SortImpl>(&input);
            run_sort::<stable::merge::SortImpl>(&input);
            run_sort::<unstable::quicksort::SortImpl>(&input);
            run_sort::<stable::rust_std::SortImpl>(&input);
            run_sort::<unstable::rust_std::SortImpl>(&input);
        }
        Algorithm::Bubble => run_sort::<stable::bubble::SortImpl>(&input),
        Algorithm::Merge => run_sort::<stable::merge::SortImpl>(&input),
        Algorithm::Quicksort => run_sort::<unstable::quicksort::SortImpl>(&input),
        Algorithm::StdStable => run_sort::<stable::rust_std::SortImpl>(&input),
        Algorithm::StdUnstable => run_sort::<unstable::rust_std::SortImpl>(&input),
    }

    if cli.stats {
        let mut v = input.clone();
        let stats = stable::bubble::sort_with_stats(&mut v);
        println!("{} {stats}", stable::bubble::SortImpl::name());
    }

    Ok(())
}

/// INFO unless `directives` (the `RUST_LOG` value) names something else.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn input_values(cli: &Cli) -> Result<Vec<i32>> {
    if let Some(name) = &cli.pattern {
        return patterns::by_name(name, cli.size).with_context(|| {
            format!(
                "unknown pattern '{name}', expected one of: {}",
                patterns::PATTERN_NAMES.join(", ")
            )
        });
    }

    if cli.values.is_empty() {
        return Ok(patterns::DEMO_VALUES.to_vec());
    }

    cli.values
        .iter()
        .map(|val| {
            val.parse::<i32>()
                .with_context(|| format!("invalid integer '{val}'"))
        })
        .collect()
}

fn run_sort<S: Sort>(input: &[i32]) {
    let mut v = input.to_vec();

    // Instrument via sort_by so every implementation is measured the same way.
    let comparisons = Cell::new(0u64);
    S::sort_by(&mut v, |a, b| {
        comparisons.set(comparisons.get() + 1);
        a.cmp(b)
    });

    let name = S::name();
    debug!(algorithm = %name, comparisons = comparisons.get(), "sorted");
    println!("{name}: {v:?} (comparisons: {})", comparisons.get());
}

fn float_values(values: &[String]) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Ok(patterns::DEMO_VALUES.iter().map(|&val| f64::from(val)).collect());
    }

    values
        .iter()
        .map(|val| {
            val.parse::<f64>()
                .with_context(|| format!("invalid float '{val}'"))
        })
        .collect()
}

fn run_float(values: &[String]) -> Result<Vec<f64>> {
    let mut v = float_values(values)?;

    println!("Original: {v:?}");

    let outcome = stable::bubble::try_sort(&mut v).map(|_| ());
    if let Err(err) = outcome {
        warn!(%err, partial = ?v, "input has no total order");
        return Err(err).context("bubble sort failed");
    }

    println!("{}: {v:?}", stable::bubble::SortImpl::name());
    Ok(v)
}
