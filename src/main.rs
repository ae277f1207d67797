use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use log::{info, LevelFilter};
use rs_seqalign::{cigar::CigarFormat, mode::AlignStrategy, AlignConfig, Alignment};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

#[derive(Parser)]
struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// The first (reference) sequence.
    seq1: String,

    /// The second sequence.
    seq2: String,

    /// Use the banded engine instead of the full matrix.
    #[clap(long, short)]
    banded: bool,

    /// Number of leading symbols of each sequence to align.
    ///
    /// Overrides the value from the configuration file.
    #[clap(long, short)]
    cap: Option<usize>,

    /// A toml file with costs and band settings.
    #[clap(long)]
    config: Option<PathBuf>,

    /// Also print the alignment as extended CIGAR string.
    #[clap(long)]
    cigar: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    TermLogger::init(
        cli.log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .map_err(|error| anyhow!("Failed to initialise logger: {error}"))?;

    let mut config = if let Some(path) = &cli.config {
        info!("Loading configuration {path:?}");
        AlignConfig::from_toml_file(path)?
    } else {
        AlignConfig::default()
    };
    if cli.banded {
        config.strategy = AlignStrategy::Banded;
    }
    if let Some(cap) = cli.cap {
        config.length_cap = cap;
    }

    let alignment = Alignment::run(&config, &cli.seq1, &cli.seq2)?;
    let result = alignment.display_result();
    println!("Cost: {}", result.cost);
    println!("{}", result.aligned1);
    println!("{}", result.aligned2);
    if cli.cigar {
        println!("CIGAR: {}", alignment.cigar(CigarFormat::Extended));
    }

    Ok(())
}
