//! Full generation: seed, grow, complete.

use crate::{
    completer::{self, CompletionReport},
    config::JigsawConfig,
    error::{ConfigError, SeedError},
    grid::Grid,
    growth::{self, RunOutcome},
    seeder,
};
use rand::Rng;
use tracing::{info, info_span};

/// A finished grid and how it got there.
#[derive(Debug)]
pub struct GenerationReport {
    pub grid: Grid,
    /// Seeds that could not be placed. Growth ran with the others.
    pub seed_error: Option<SeedError>,
    pub growth: RunOutcome,
    pub completion: CompletionReport,
}

/// Runs seeding, growth and completion on a fresh grid.
///
/// Seed exhaustion and non-convergence are reported in the result rather
/// than aborting; only an invalid `cfg` is an error.
pub fn generate<R: Rng + ?Sized>(
    cfg: &JigsawConfig,
    rng: &mut R,
) -> Result<GenerationReport, ConfigError> {
    cfg.validate()?;
    let _span = info_span!(
        "generate",
        resolution = cfg.resolution,
        pieces = cfg.seeding.num_pieces
    )
    .entered();

    let mut grid = Grid::new(cfg.resolution, cfg.border);
    let seed_error = seeder::seed(&mut grid, &cfg.seeding, rng).err();
    let growth = growth::run(
        &mut grid,
        cfg.growth.grow_prob,
        cfg.growth.max_steps,
        rng,
    );
    let completion = completer::complete(&mut grid, cfg.growth.filler_steps, rng);

    info!(
        converged = growth.converged(),
        steps = growth.steps(),
        filler_regions = completion.regions,
        "generation finished"
    );

    Ok(GenerationReport {
        grid,
        seed_error,
        growth,
        completion,
    })
}
