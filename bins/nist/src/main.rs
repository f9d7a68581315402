use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use bitseq::{
    fs::{read_sequences, write_report},
    nist::Nist,
};

/// a sequence passes when none of its p-values is below this level
const ALPHA: f64 = 0.01;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// a JSON object mapping labels to sequences of bits
    #[arg(short, long)]
    sequences: PathBuf,

    /// where to write the results of the tests
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init()
        .expect("cannot init logger");

    let cli = Cli::parse();

    let sequences = read_sequences(&cli.sequences)?;
    info!("loaded {} sequences", sequences.len());

    let mut report = String::new();
    for (label, sequence) in &sequences {
        let results = Nist::new(sequence).report();
        let verdict = if results.passes(ALPHA) { "pass" } else { "fail" };
        if verdict == "fail" {
            warn!("sequence `{}` fails at level {}", label, ALPHA);
        }
        report.push_str(&format!(
            "{}\n\n{}\nverdict: {}\n\n",
            label, results, verdict
        ));
    }

    write_report(&cli.output, report.trim_end())?;
    info!("results written to `{:?}`", cli.output);

    Ok(())
}
