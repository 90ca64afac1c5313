use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Write a synthetic salary column for the viewer.
#[derive(Debug, Parser)]
#[command(name = "generate_sample", version)]
struct Args {
    /// Output CSV, one salary per line
    #[arg(long, short, default_value = "data1-1.csv")]
    output: PathBuf,

    /// Number of salaries
    #[arg(long, default_value_t = 400)]
    count: usize,

    /// Mean annual salary (Euros)
    #[arg(long, default_value_t = 41_000.0)]
    mean: f64,

    /// Standard deviation (Euros)
    #[arg(long, default_value_t = 11_500.0)]
    std_dev: f64,

    /// RNG seed, same seed gives the same file
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Draw `count` salaries; negative draws are clamped to zero.
fn generate_salaries(count: usize, mean: f64, std_dev: f64, seed: u64) -> Result<Vec<f64>> {
    let normal = Normal::new(mean, std_dev).map_err(|e| anyhow!("invalid distribution: {e}"))?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..count)
        .map(|_| normal.sample(&mut rng).max(0.0))
        .collect())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let salaries = generate_salaries(args.count, args.mean, args.std_dev, args.seed)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for salary in &salaries {
        writer
            .write_record([format!("{salary:.2}")])
            .with_context(|| format!("writing {}", args.output.display()))?;
    }
    writer.flush().context("flushing CSV writer")?;

    log::info!("seed={} mean={} std_dev={}", args.seed, args.mean, args.std_dev);
    println!(
        "Wrote {} salaries to {}",
        salaries.len(),
        args.output.display()
    );
    Ok(())
}
