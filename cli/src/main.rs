//! `revgate` - classify reversible gates given as truth tables.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use clap::Parser;
use revgate::{Classification, TableReader};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

type Result<T> = anyhow::Result<T>;

#[derive(Parser, Debug)]
#[command(name = "revgate")]
#[command(about = "Reversible gate classifier", long_about = None)]
#[command(version)]
struct Cli {
    /// Truth-table files, read in order. Reads stdin if none are given or
    /// for `-`.
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Print the flags and weight modulus after each class name
    #[arg(short, long)]
    fingerprint: bool,

    /// Report progress on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let stdin_only = [PathBuf::from("-")];
    let inputs = if cli.inputs.is_empty() {
        &stdin_only[..]
    } else {
        &cli.inputs[..]
    };

    let mut total = 0;
    for input in inputs {
        let label = input_label(input);
        let reader = open_input(input)?;
        total += classify_stream(reader, &label, &cli, &mut out)?;
    }

    if cli.verbose {
        eprintln!("Classified {total} gates");
    }
    Ok(())
}

fn input_label(path: &Path) -> String {
    if path == Path::new("-") {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Classifies every gate in one stream, writing one line per gate.
///
/// Returns the number of gates classified. Stops at the first malformed row,
/// truncated gate or non-reversible table.
fn classify_stream(
    reader: impl BufRead,
    label: &str,
    cli: &Cli,
    out: &mut impl Write,
) -> Result<usize> {
    let mut count = 0;
    for gate in TableReader::new(reader) {
        let gate = gate.map_err(|e| anyhow!("{label}: {e}"))?;
        count += 1;

        let c = Classification::of(&gate).map_err(|e| anyhow!("{label}: gate {count}: {e}"))?;
        let name = c.name();

        if cli.verbose {
            eprintln!(
                "{label}: gate {count}: {}-bit, {}, mod {} -> {name}",
                gate.width(),
                c.flags,
                c.modulus
            );
        }

        if cli.fingerprint {
            writeln!(out, "{name}\t{}\tmod={}", c.flags, c.modulus)?;
        } else {
            writeln!(out, "{name}")?;
        }
    }
    Ok(count)
}
