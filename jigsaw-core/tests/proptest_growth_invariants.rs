//! Property-based invariant tests for the growth engine.
//!
//! For arbitrary grid sizes, borders, piece counts, growth probabilities
//! and RNG seeds:
//!
//! 1. Bonds are reciprocal after every step and after completion.
//! 2. Bonds never cross.
//! 3. A cell's colour never changes once assigned.
//! 4. Completion leaves no unclaimed cell and never claims a walled one.
//! 5. The circular mask is invariant under a 90° rotation.
//! 6. The rectangular mask walls exactly the outer ring.

use glam::IVec2;
use jigsaw_core::{
    completer::complete,
    config::SeedConfig,
    grid::{Border, Grid},
    growth::step,
    seeder::seed,
    types::PieceId,
};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

// ── Helpers ─────────────────────────────────────────────────────────────

fn border_strategy() -> impl Strategy<Value = Border> {
    prop_oneof![Just(Border::Rectangular), Just(Border::Circular)]
}

fn seeded_grid(resolution: usize, border: Border, pieces: u32, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(resolution, border);
    let cfg = SeedConfig {
        num_pieces: pieces,
        min_dist: 0.0,
        max_attempts: 1000,
    };
    // Tiny circular grids may not fit every piece; that is fine here.
    let _ = seed(&mut grid, &cfg, rng);
    grid
}

fn colors(grid: &Grid) -> Vec<Option<PieceId>> {
    grid.cells().map(|c| c.color).collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Step invariants
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn steps_preserve_bond_and_color_invariants(
        resolution in 1usize..24,
        border in border_strategy(),
        pieces in 1u32..8,
        grow_prob in 0.0f64..=1.0,
        rng_seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(rng_seed);
        let mut grid = seeded_grid(resolution, border, pieces, &mut rng);

        for _ in 0..40 {
            let before = colors(&grid);
            let active_before = grid.active_cells().len();
            let stats = step(&mut grid, grow_prob, &mut rng);

            prop_assert!(grid.bonds_are_reciprocal());
            prop_assert!(grid.bonds_are_planar());
            for (old, cell) in before.iter().zip(grid.cells()) {
                if old.is_some() {
                    prop_assert_eq!(*old, cell.color, "color changed at {:?}", cell.coords);
                }
            }
            prop_assert_eq!(
                grid.active_cells().len(),
                active_before + stats.claimed.len() - stats.retired
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Completion covers everything
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn completion_covers_every_open_cell(
        resolution in 1usize..20,
        border in border_strategy(),
        pieces in 0u32..6,
        grow_prob in 0.0f64..=1.0,
        steps in 0usize..30,
        rng_seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(rng_seed);
        let mut grid = seeded_grid(resolution, border, pieces, &mut rng);
        for _ in 0..steps {
            step(&mut grid, grow_prob, &mut rng);
        }
        let walled = grid.walled_count();
        let before = colors(&grid);

        complete(&mut grid, 1000, &mut rng);

        prop_assert!(grid.is_fully_covered());
        prop_assert_eq!(grid.walled_count(), walled);
        prop_assert!(grid.bonds_are_reciprocal());
        prop_assert!(grid.bonds_are_planar());
        for (old, cell) in before.iter().zip(grid.cells()) {
            if old.is_some() {
                prop_assert_eq!(*old, cell.color);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5-6. Border masks
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn circular_mask_is_rotation_symmetric(resolution in 0usize..60) {
        let grid = Grid::new(resolution, Border::Circular);
        let last = grid.side() as i32 - 1;
        for cell in grid.cells() {
            let IVec2 { x, y } = cell.coords;
            let rotated = grid.cell(IVec2::new(y, last - x)).unwrap();
            prop_assert_eq!(cell.is_walled(), rotated.is_walled());
        }
    }

    #[test]
    fn rectangular_mask_walls_outer_ring(resolution in 0usize..60) {
        let grid = Grid::new(resolution, Border::Rectangular);
        let last = grid.side() as i32 - 1;
        for cell in grid.cells() {
            let IVec2 { x, y } = cell.coords;
            let ring = x == 0 || y == 0 || x == last || y == last;
            prop_assert_eq!(cell.is_walled(), ring);
        }
        prop_assert_eq!(grid.walled_count(), grid.side() * grid.side() - resolution * resolution);
    }
}
