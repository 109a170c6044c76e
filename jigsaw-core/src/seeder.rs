//! Seed placement: one claimed, active cell per piece.

use crate::{
    cell::Cell,
    config::SeedConfig,
    error::SeedError,
    grid::Grid,
    types::{Coord, FILLER_PIECE, PieceId},
};
use glam::IVec2;
use rand::Rng;
use tracing::{debug, warn};

/// Places `cfg.num_pieces` new seeds at random open cells.
///
/// New pieces are numbered after the ones already on the grid, so on a
/// fresh grid they are `1..=num_pieces`. For each piece, up to
/// `cfg.max_attempts` coordinates are drawn uniformly over the whole grid;
/// a draw is accepted when it is at least `cfg.min_dist` away from every
/// cell in the active set and the cell there is open. Draws rejected for
/// either reason count as attempts.
///
/// A piece that runs out of attempts is skipped and the remaining pieces
/// are still tried. Seeds that were placed stay on the grid either way.
///
/// ### Returns
/// - `Ok(n)` with the number of seeds placed when every piece was placed.
/// - `Err(SeedError::PlacementExhausted)` listing the skipped piece ids.
/// - `Err(SeedError::ReservedPiece)` if the piece ids would reach
///   [`FILLER_PIECE`]; nothing is placed in that case.
pub fn seed<R: Rng + ?Sized>(
    grid: &mut Grid,
    cfg: &SeedConfig,
    rng: &mut R,
) -> Result<usize, SeedError> {
    let first = grid.num_pieces + 1;
    let last = grid
        .num_pieces
        .checked_add(cfg.num_pieces)
        .filter(|&last| last < FILLER_PIECE)
        .ok_or(SeedError::ReservedPiece {
            piece: FILLER_PIECE,
        })?;
    grid.num_pieces = last;

    let side = grid.side() as i32;
    let mut failed = Vec::new();
    let mut placed = 0;

    for piece in first..=last {
        let mut found = None;
        for _ in 0..cfg.max_attempts {
            let coord = IVec2::new(rng.random_range(0..side), rng.random_range(0..side));
            if too_close(grid.active_cells(), coord, cfg.min_dist) {
                continue;
            }
            if grid.cell(coord).is_some_and(Cell::is_open) {
                found = Some(coord);
                break;
            }
        }

        match found {
            Some(coord) => {
                claim_seed(grid, coord, piece);
                placed += 1;
            }
            None => failed.push(piece),
        }
    }

    if failed.is_empty() {
        debug!(placed, "seeded all pieces");
        Ok(placed)
    } else {
        warn!(
            placed,
            failed = failed.len(),
            attempts = cfg.max_attempts,
            "seed placement exhausted"
        );
        Err(SeedError::PlacementExhausted {
            pieces: failed,
            attempts: cfg.max_attempts,
        })
    }
}

/// Places a seed for `piece` at a chosen coordinate.
///
/// Raises the grid's piece count to `piece` if it is larger.
pub fn place_seed(grid: &mut Grid, coord: Coord, piece: PieceId) -> Result<(), SeedError> {
    if piece == 0 || piece == FILLER_PIECE {
        return Err(SeedError::ReservedPiece { piece });
    }
    let cell = grid.cell(coord).ok_or(SeedError::OutOfBounds { coord })?;
    if !cell.is_open() {
        return Err(SeedError::Unavailable { coord });
    }

    claim_seed(grid, coord, piece);
    grid.num_pieces = grid.num_pieces.max(piece);
    Ok(())
}

fn claim_seed(grid: &mut Grid, coord: Coord, piece: PieceId) {
    if let Some(cell) = grid.cell_mut(coord) {
        cell.claim(piece);
        grid.active_cells.push(coord);
    }
}

fn too_close(seeds: &[Coord], coord: Coord, min_dist: f64) -> bool {
    seeds
        .iter()
        .any(|&p| (coord - p).as_dvec2().length() < min_dist)
}
