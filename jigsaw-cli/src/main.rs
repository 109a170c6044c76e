//! Command-line entry point for the random-walk jigsaw generator.
//!
//! This binary parses generation parameters, installs a tracing
//! subscriber and delegates the actual work to [`Runner`] from the
//! `runner` module.

mod runner;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use jigsaw_core::{
    config::{GrowthConfig, JigsawConfig, SeedConfig},
    grid::Border,
};
use runner::Runner;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BorderArg {
    /// Square puzzle.
    Rect,
    /// Round puzzle.
    Circ,
}

impl From<BorderArg> for Border {
    fn from(arg: BorderArg) -> Self {
        match arg {
            BorderArg::Rect => Border::Rectangular,
            BorderArg::Circ => Border::Circular,
        }
    }
}

/// Partition a grid into jigsaw pieces by simultaneous random-walk growth.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Interior grid size; one border cell is added on each side.
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    resolution: u32,
    #[arg(long, value_enum, default_value_t = BorderArg::Rect)]
    border: BorderArg,
    /// Number of pieces to seed.
    #[arg(long, default_value_t = 11)]
    pieces: u32,
    /// Minimum distance between seeds. Large values may leave pieces unplaced.
    #[arg(long, default_value_t = 1.0)]
    min_dist: f64,
    /// Random draws per seed before giving up on it.
    #[arg(long, default_value_t = 1000)]
    seed_attempts: usize,
    /// Probability that an active cell grows in a given generation.
    #[arg(long, default_value_t = 1.0)]
    grow_prob: f64,
    /// Generation budget for the main growth run.
    #[arg(long, default_value_t = 500)]
    max_steps: usize,
    /// Generation budget for each filler region.
    #[arg(long, default_value_t = 1000)]
    filler_steps: usize,
    /// RNG seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Write cells and boundary arcs as JSON to this path.
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,
    /// Cell diameter used for arc coordinates in the JSON output.
    #[arg(long, default_value_t = 15.0)]
    scale: f32,
}

impl CliArgs {
    fn config(&self) -> JigsawConfig {
        JigsawConfig {
            resolution: self.resolution as usize,
            border: self.border.into(),
            seeding: SeedConfig {
                num_pieces: self.pieces,
                min_dist: self.min_dist,
                max_attempts: self.seed_attempts,
            },
            growth: GrowthConfig {
                grow_prob: self.grow_prob,
                max_steps: self.max_steps,
                filler_steps: self.filler_steps,
            },
            rng_seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let runner = Runner::new(args.config());
    let report = runner.run()?;

    print!("{}", runner::size_table(&report.grid));

    if let Some(path) = &args.json {
        runner.export_json(&report, args.scale, path)?;
    }
    Ok(())
}
