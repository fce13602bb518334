//! ped-mendel CLI entry point
//!
//! Pedigree genotype normalization and Mendelian validation tool.

use clap::Parser;
use ped_mendel::formats;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "ped-mendel")]
#[command(about = "Pedigree genotype normalization and Mendelian validation tool")]
#[command(version)]
#[command(author = "ped-mendel Contributors")]
struct Cli {
    /// Input pedigree file (plain text, gzip or bzip2)
    input: PathBuf,

    /// Output file (optional, stdout if not specified)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    eprintln!("Reading {:?}...", cli.input);
    eprintln!("Converting genotypes...");

    let stats = match &cli.output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            let mut writer = BufWriter::with_capacity(128 * 1024, file);
            let stats = formats::convert_ped(&cli.input, &mut writer)?;
            writer.flush()?;
            stats
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::with_capacity(128 * 1024, stdout.lock());
            let stats = formats::convert_ped(&cli.input, &mut writer)?;
            writer.flush()?;
            stats
        }
    };

    eprintln!("\n=== Conversion Statistics ===");
    eprintln!("Families:        {}", stats.families);
    eprintln!("Individuals:     {}", stats.individuals);
    eprintln!("Marker columns:  {}", stats.markers);
    eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
    eprintln!("{} invalid genotypes corrected", stats.corrected);

    Ok(())
}
