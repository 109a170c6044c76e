//! Quarter-circle boundary geometry for renderers.
//!
//! Each claimed cell is drawn as a circle split into four diagonal
//! quadrants. A quadrant that carries a bond is open towards the bonded
//! neighbour; every other quadrant contributes one quarter arc to the
//! outline of its piece.

use crate::{
    grid::Grid,
    types::{Coord, Diagonal, PieceId},
};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One quarter circle of a piece outline, in render coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuarterArc {
    pub cell: Coord,
    pub piece: PieceId,
    pub quadrant: Diagonal,
    pub center: Vec2,
    pub radius: f32,
    /// Point on the vertical axis through `center`.
    pub start: Vec2,
    /// Point on the horizontal axis through `center`.
    pub end: Vec2,
    /// Arc sweep flag as used by SVG path `a` commands.
    pub sweep: bool,
}

impl QuarterArc {
    /// Quarter arc of quadrant `quadrant` around `center`.
    pub fn new(cell: Coord, piece: PieceId, quadrant: Diagonal, center: Vec2, radius: f32) -> Self {
        let offset = quadrant.offset().as_vec2() * radius;
        let start = center + Vec2::new(0.0, offset.y);
        let end = center + Vec2::new(offset.x, 0.0);
        Self {
            cell,
            piece,
            quadrant,
            center,
            radius,
            start,
            end,
            sweep: matches!(quadrant, Diagonal::UpLeft | Diagonal::DownRight),
        }
    }
}

/// Outline arcs of every claimed cell, filler included.
///
/// Cell `(i, j)` is centred at `(i * scale, j * scale)` and drawn with
/// radius `scale / 2`. Walled and unclaimed cells produce nothing.
pub fn arcs(grid: &Grid, scale: f32) -> Vec<QuarterArc> {
    let radius = scale / 2.0;
    grid.cells()
        .filter_map(|cell| cell.color.map(|piece| (cell, piece)))
        .flat_map(|(cell, piece)| {
            let center = cell.coords.as_vec2() * scale;
            cell.bonds
                .missing()
                .map(move |quadrant| QuarterArc::new(cell.coords, piece, quadrant, center, radius))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::Border, seeder::place_seed};
    use glam::IVec2;

    #[test]
    fn quadrant_endpoints_follow_diagonal() {
        let center = Vec2::new(30.0, 45.0);
        let r = 7.5;
        let cases = [
            (Diagonal::UpRight, Vec2::new(30.0, 52.5), Vec2::new(37.5, 45.0), false),
            (Diagonal::UpLeft, Vec2::new(30.0, 52.5), Vec2::new(22.5, 45.0), true),
            (Diagonal::DownLeft, Vec2::new(30.0, 37.5), Vec2::new(22.5, 45.0), false),
            (Diagonal::DownRight, Vec2::new(30.0, 37.5), Vec2::new(37.5, 45.0), true),
        ];
        for (quadrant, start, end, sweep) in cases {
            let arc = QuarterArc::new(IVec2::new(2, 3), 1, quadrant, center, r);
            assert_eq!(arc.start, start, "{quadrant:?}");
            assert_eq!(arc.end, end, "{quadrant:?}");
            assert_eq!(arc.sweep, sweep, "{quadrant:?}");
            assert!((arc.start.distance(center) - r).abs() < 1e-6);
            assert!((arc.end.distance(center) - r).abs() < 1e-6);
        }
    }

    #[test]
    fn bonded_quadrants_have_no_arc() {
        let mut grid = Grid::new(4, Border::Rectangular);
        place_seed(&mut grid, IVec2::new(2, 2), 1).unwrap();
        grid.link(IVec2::new(2, 2), Diagonal::UpRight, 1);

        let arcs = arcs(&grid, 10.0);

        // Two claimed cells, one bonded quadrant each.
        assert_eq!(arcs.len(), 6);
        assert!(
            !arcs
                .iter()
                .any(|a| a.cell == IVec2::new(2, 2) && a.quadrant == Diagonal::UpRight)
        );
        assert!(
            !arcs
                .iter()
                .any(|a| a.cell == IVec2::new(3, 3) && a.quadrant == Diagonal::DownLeft)
        );
        assert!(arcs.iter().all(|a| a.piece == 1 && a.radius == 5.0));
        let first = arcs.iter().find(|a| a.cell == IVec2::new(3, 3)).unwrap();
        assert_eq!(first.center, Vec2::new(30.0, 30.0));
    }

    #[test]
    fn unclaimed_and_walled_cells_are_skipped() {
        let grid = Grid::new(3, Border::Circular);
        assert!(arcs(&grid, 15.0).is_empty());
    }
}
