//! Gap filling after growth has stalled.

use crate::{
    grid::Grid,
    growth::{self, RunOutcome},
    types::FILLER_PIECE,
};
use rand::Rng;
use tracing::debug;

/// Summary of a [`complete`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompletionReport {
    /// Number of filler regions started.
    pub regions: usize,
    /// Cells claimed for [`FILLER_PIECE`] during the pass.
    pub filler_cells: usize,
    /// Filler regions whose growth hit `filler_steps` before converging.
    pub unconverged_regions: usize,
}

/// Claims every cell that is still unclaimed for the filler piece.
///
/// Cells are visited in row-major order. Each open cell becomes a new
/// filler seed, and growth (probability `1`) runs for at most
/// `filler_steps` generations so the filler region spreads into the
/// surrounding gap before the sweep moves on. Any cells that were still
/// active from the main run keep growing during these generations too.
///
/// Afterwards no cell is unclaimed.
pub fn complete<R: Rng + ?Sized>(
    grid: &mut Grid,
    filler_steps: usize,
    rng: &mut R,
) -> CompletionReport {
    let mut report = CompletionReport::default();
    let filler_before = grid.count().get(&FILLER_PIECE).copied().unwrap_or(0);

    let coords: Vec<_> = grid.cells().map(|c| c.coords).collect();
    for coord in coords {
        let Some(cell) = grid.cell_mut(coord) else {
            continue;
        };
        if !cell.is_open() {
            continue;
        }

        cell.claim(FILLER_PIECE);
        grid.active_cells.push(coord);
        report.regions += 1;

        if let RunOutcome::NotConverged { .. } = growth::run(grid, 1.0, filler_steps, rng) {
            report.unconverged_regions += 1;
        }
    }

    report.filler_cells =
        grid.count().get(&FILLER_PIECE).copied().unwrap_or(0) - filler_before;
    debug_assert!(grid.is_fully_covered(), "completion left unclaimed cells");
    debug!(
        regions = report.regions,
        filler_cells = report.filler_cells,
        "completion finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::Border, seeder::place_seed};
    use glam::IVec2;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn fills_an_unseeded_grid_with_filler() {
        let mut grid = Grid::new(6, Border::Rectangular);
        let mut rng = StdRng::seed_from_u64(2);

        let report = complete(&mut grid, 1000, &mut rng);

        assert!(grid.is_fully_covered());
        assert_eq!(report.filler_cells, 36);
        // The first region takes the whole even lattice; bonds there may
        // split the odd lattice into several regions.
        assert!(report.regions >= 2);
        assert_eq!(grid.cell(IVec2::new(1, 1)).unwrap().color, Some(FILLER_PIECE));
        assert_eq!(report.unconverged_regions, 0);
        assert_eq!(grid.count().get(&FILLER_PIECE), Some(&36));
        assert!(grid.active_cells().is_empty());
    }

    #[test]
    fn keeps_existing_pieces_and_fills_the_rest() {
        let mut grid = Grid::new(5, Border::Rectangular);
        let mut rng = StdRng::seed_from_u64(6);
        place_seed(&mut grid, IVec2::new(3, 3), 1).unwrap();
        growth::run(&mut grid, 1.0, 50, &mut rng);
        let piece_cells = grid.count()[&1];
        let colors_before: Vec<_> = grid.cells().map(|c| c.color).collect();

        let report = complete(&mut grid, 1000, &mut rng);

        assert!(grid.is_fully_covered());
        assert_eq!(grid.count()[&1], piece_cells);
        assert_eq!(report.filler_cells, 25 - piece_cells);
        for (before, cell) in colors_before.iter().zip(grid.cells()) {
            if before.is_some() {
                assert_eq!(*before, cell.color);
            }
        }
        assert!(grid.bonds_are_reciprocal());
        assert!(grid.bonds_are_planar());
    }

    #[test]
    fn zero_filler_budget_still_covers_every_cell() {
        let mut grid = Grid::new(4, Border::Circular);
        let mut rng = StdRng::seed_from_u64(0);

        let report = complete(&mut grid, 0, &mut rng);

        assert!(grid.is_fully_covered());
        assert_eq!(report.regions, report.filler_cells);
        assert_eq!(report.unconverged_regions, report.regions);
    }

    #[test]
    fn walled_cells_are_never_claimed() {
        let mut grid = Grid::new(8, Border::Circular);
        let mut rng = StdRng::seed_from_u64(12);
        let walled = grid.walled_count();

        complete(&mut grid, 1000, &mut rng);

        assert_eq!(grid.walled_count(), walled);
        assert!(grid.cells().filter(|c| c.is_walled()).all(|c| c.color.is_none()));
    }
}
