//! Tallies gate classes over every permutation of a small width, or over a
//! random sample of permutations of a larger one.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use revgate::{ClassName, Gate, GateError, classify, permutations};

/// Widest gate whose permutations are enumerated exhaustively: `8! = 40320`.
const MAX_EXHAUSTIVE_WIDTH: u32 = 3;

type Tally = BTreeMap<ClassName, u64>;

/// Reversible gate class census
#[derive(Parser, Debug)]
#[command(name = "census")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Gate width in bits
    #[arg(value_name = "WIDTH", value_parser = clap::value_parser!(u32).range(1..=20))]
    width: u32,

    /// Classify this many random permutations instead of all of them
    #[arg(short = 'n', long, value_name = "COUNT")]
    samples: Option<u64>,

    /// Seed for random sampling
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (total, tally) = match cli.samples {
        Some(samples) => {
            println!(
                "Sampling {samples} random {}-bit gates (seed {})",
                cli.width, cli.seed
            );
            (samples, sampled(cli.width, samples, cli.seed)?)
        }
        None => {
            if cli.width > MAX_EXHAUSTIVE_WIDTH {
                bail!(
                    "{}-bit gates are too many to enumerate; pass --samples",
                    cli.width
                );
            }
            let total = factorial(1 << cli.width);
            println!("Enumerating all {total} {}-bit gates", cli.width);
            (total, exhaustive(cli.width, total)?)
        }
    };

    print_tally(total, &tally);
    Ok(())
}

fn progress_bar(len: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

fn exhaustive(width: u32, total: u64) -> Result<Tally> {
    let pb = progress_bar(total)?;
    let tally = permutations(width)?
        .par_bridge()
        .map(|gate| {
            pb.inc(1);
            classify(&gate)
        })
        .try_fold(Tally::new, count)
        .try_reduce(Tally::new, merge)?;
    pb.finish_and_clear();
    Ok(tally)
}

fn sampled(width: u32, samples: u64, seed: u64) -> Result<Tally> {
    let pb = progress_bar(samples)?;
    let tally = (0..samples)
        .into_par_iter()
        .map(|i| {
            pb.inc(1);
            classify(&random_permutation(width, seed, i)?)
        })
        .try_fold(Tally::new, count)
        .try_reduce(Tally::new, merge)?;
    pb.finish_and_clear();
    Ok(tally)
}

/// Sample `index` of the stream seeded by `seed`. Independent of how the
/// samples are split across threads.
fn random_permutation(width: u32, seed: u64, index: u64) -> Result<Gate, GateError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    rng.set_stream(index);
    let mut table: Vec<u32> = (0..1u32 << width).collect();
    table.shuffle(&mut rng);
    Gate::new(width, table)
}

fn count(mut tally: Tally, name: Result<ClassName, GateError>) -> Result<Tally, GateError> {
    *tally.entry(name?).or_insert(0) += 1;
    Ok(tally)
}

fn merge(mut a: Tally, b: Tally) -> Result<Tally, GateError> {
    for (name, n) in b {
        *a.entry(name).or_insert(0) += n;
    }
    Ok(a)
}

fn factorial(n: u64) -> u64 {
    (1..=n).product()
}

fn print_tally(total: u64, tally: &Tally) {
    let mut rows: Vec<_> = tally.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

    println!();
    println!("{:<14} {:>12} {:>9}", "Class", "Gates", "Share");
    println!("{}", "-".repeat(37));
    for (name, n) in rows {
        let share = 100.0 * *n as f64 / total as f64;
        println!("{:<14} {:>12} {:>8.3}%", name.to_string(), n, share);
    }
    println!("{}", "-".repeat(37));
    println!("{:<14} {:>12}", "Total", total);
}
