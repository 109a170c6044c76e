//! Simultaneous growth of all pieces, one generation at a time.
//!
//! Every active cell gets exactly one attempt per generation to claim a
//! free diagonal neighbour, so all pieces expand at comparable rates no
//! matter in which order they were seeded.

use crate::{
    grid::{Grid, crosses_vertical_bond},
    types::{Coord, Diagonal},
};
use rand::{Rng, seq::SliceRandom};
use tracing::{debug, trace};

/// What happened during one call to [`step`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepStats {
    /// Cells claimed this generation, in claim order.
    pub claimed: Vec<Coord>,
    /// Cells that found no free neighbour and left the active set for good.
    pub retired: usize,
}

/// Result of [`run`]. Neither variant is a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The active set became empty after `steps` generations.
    Converged { steps: usize },
    /// The generation budget ran out with cells still active.
    NotConverged {
        steps: usize,
        remaining_active: usize,
    },
}

impl RunOutcome {
    pub fn converged(&self) -> bool {
        matches!(self, RunOutcome::Converged { .. })
    }

    pub fn steps(&self) -> usize {
        match *self {
            RunOutcome::Converged { steps } | RunOutcome::NotConverged { steps, .. } => steps,
        }
    }
}

/// Diagonal neighbours of `coord` that are unclaimed and whose link would
/// not cross an existing bond, in index order.
///
/// ### Returns
/// A fixed buffer and the number of valid entries at its front.
fn free_neighbors(grid: &Grid, coord: Coord) -> ([Diagonal; 4], usize) {
    let (upper, lower) = grid.vertical_bonds(coord);
    let mut free = [Diagonal::UpRight; 4];
    let mut len = 0;
    for dir in Diagonal::ALL {
        if grid.is_empty_at(coord + dir.offset()) && !crosses_vertical_bond(dir, upper, lower) {
            free[len] = dir;
            len += 1;
        }
    }
    (free, len)
}

/// Advances the simulation by one generation.
///
/// The active list is shuffled first; the resulting order decides which
/// piece wins when two compete for the same cell. Then, for each active
/// cell in that order:
///
/// 1. Collect its free neighbours (see [`free_neighbors`]).
/// 2. With none left, mark it inactive and drop it from the active set.
/// 3. Otherwise pick one uniformly at random and, with probability
///    `grow_prob`, claim it for this cell's piece, record the bond pair
///    and add the neighbour to the next active set.
/// 4. Keep the cell itself in the next active set.
///
/// Claims are applied immediately, so later cells in the same generation
/// see them.
///
/// ### Parameters
/// - `grid` - Grid to mutate; its active set is replaced.
/// - `grow_prob` - Chance that a chosen neighbour is actually claimed.
/// - `rng` - Random source for the shuffle, neighbour choice and growth roll.
pub fn step<R: Rng + ?Sized>(grid: &mut Grid, grow_prob: f64, rng: &mut R) -> StepStats {
    // Visiting order settles contested cells.
    let mut active = std::mem::take(&mut grid.active_cells);
    active.shuffle(rng);

    let mut next = Vec::with_capacity(active.len() * 2);
    let mut stats = StepStats::default();

    for coord in active {
        let Some(piece) = grid.cell(coord).and_then(|c| c.color) else {
            continue;
        };

        let (free, len) = free_neighbors(grid, coord);
        // Boxed in: retire for good.
        if len == 0 {
            if let Some(cell) = grid.cell_mut(coord) {
                cell.active = false;
            }
            stats.retired += 1;
            continue;
        }

        // Direction is chosen before the growth roll.
        let dir = free[rng.random_range(0..len)];
        if rng.random::<f64>() < grow_prob {
            // Claim the neighbour; it joins the frontier next generation.
            let claimed = grid.link(coord, dir, piece);
            stats.claimed.push(claimed);
            next.push(claimed);
        }
        next.push(coord);
    }

    grid.active_cells = next;
    trace!(
        claimed = stats.claimed.len(),
        retired = stats.retired,
        active = grid.active_cells.len(),
        "growth step"
    );
    stats
}

/// Steps until the active set is empty or `max_steps` generations ran.
///
/// Convergence is checked after each generation. An already empty active
/// set converges after zero generations.
pub fn run<R: Rng + ?Sized>(
    grid: &mut Grid,
    grow_prob: f64,
    max_steps: usize,
    rng: &mut R,
) -> RunOutcome {
    if grid.active_cells.is_empty() {
        return RunOutcome::Converged { steps: 0 };
    }

    for steps in 1..=max_steps {
        step(grid, grow_prob, rng);
        if grid.active_cells.is_empty() {
            debug!(steps, "growth converged");
            return RunOutcome::Converged { steps };
        }
    }

    let remaining_active = grid.active_cells.len();
    debug!(max_steps, remaining_active, "growth did not converge");
    RunOutcome::NotConverged {
        steps: max_steps,
        remaining_active,
    }
}
