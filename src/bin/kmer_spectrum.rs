use anyhow::Context;
use clap::Parser;
use linguistic_complexity::*;
use log::info;
use std::path::PathBuf;

/// Histogram of k-mer multiplicities for a single k.
#[derive(Parser)]
struct Args {
    path: PathBuf,
    k: usize,

    #[clap(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .verbosity(2 + args.verbose as usize)
        .show_level(false)
        .init()?;

    let seq = read_sequence(&args.path)
        .with_context(|| format!("failed to read {:?}", args.path))?;
    let counts = count_kmers(&seq, args.k)?;
    let kmers = seq.len() - args.k + 1;
    info!("{} distinct of {kmers} k-mers", counts.len());

    let mut acc = 0;
    for bucket in frequency_spectrum(&counts) {
        acc += bucket.occurrences;
        println!(
            "2^{:>2} {:>10} {:>10} {acc:>10} {:>10.4} {:>10.4}",
            bucket.log2,
            bucket.kmers,
            bucket.occurrences,
            acc as f64 / kmers as f64,
            1. - acc as f64 / kmers as f64
        );
    }
    Ok(())
}
