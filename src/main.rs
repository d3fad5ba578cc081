use anyhow::Context;
use clap::Parser;
use linguistic_complexity::{plot, util::*, Alphabet, Report, StatsConfig};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// K-mer statistics and linguistic complexity of a sequence.
#[derive(Parser)]
struct Args {
    /// Sequence file: plain text, FASTA or FASTQ.
    path: Option<PathBuf>,

    /// Crop the sequence to this length. Without a path, the length of the
    /// generated random sequence.
    #[clap(short)]
    n: Option<usize>,

    /// Seed for the random sequence.
    #[clap(long, default_value_t = 31415)]
    seed: u64,

    /// Alphabet size used for the possible k-mer bound.
    #[clap(short, long, value_enum, default_value_t = Alphabet::Nucleotide)]
    alphabet: Alphabet,

    /// Number of table rows to print.
    #[clap(long, default_value_t = 5)]
    head: usize,

    /// Print the full report as JSON.
    #[clap(long)]
    json: bool,

    /// Plot label; defaults to the input path.
    #[clap(short = 'o', long)]
    label: Option<String>,

    /// Skip writing the plot.
    #[clap(long)]
    no_plot: bool,

    /// Compute the observed and possible tables one after the other.
    #[clap(long)]
    sequential: bool,

    #[clap(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .verbosity(2 + args.verbose as usize)
        .show_level(false)
        .init()?;

    let (seq, default_label) = if let Some(path) = &args.path {
        let mut seq =
            read_sequence(path).with_context(|| format!("failed to read {path:?}"))?;
        info!("Length {}", seq.len());
        if let Some(n) = args.n {
            if n < seq.len() {
                seq.truncate(n);
                info!("Cropped to {n}");
            }
        }
        (seq, path.display().to_string())
    } else {
        let rng = &mut ChaCha8Rng::seed_from_u64(args.seed);
        let n = args.n.unwrap_or(1000);
        info!("Random sequence of length {n}, seed {}", args.seed);
        (random_sequence(n, rng), "random".to_string())
    };
    let label = args.label.unwrap_or(default_label);

    let config = StatsConfig {
        alphabet: args.alphabet,
        parallel: !args.sequential,
    };
    let report = time("statistics", || Report::new(label, &seq, &config))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.table.head_table(args.head));
        println!(
            "The linguistic complexity is {}",
            report.linguistic_complexity
        );
    }

    if !args.no_plot {
        plot::render(&report.table, &report.label).context("failed to render plot")?;
    }
    Ok(())
}
