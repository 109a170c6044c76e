use crate::{
    cell::{Bonds, Cell, CellState},
    types::{Coord, Diagonal, PieceId},
};
use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

/// Margin subtracted from the half side when carving the circular mask.
pub const CIRCLE_MARGIN: f64 = 1.1;

/// Shape of the walled region around the playable cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Border {
    /// Outermost ring of cells.
    #[default]
    Rectangular,
    /// Everything outside a centred circle.
    Circular,
}

/// Serializable view of one cell, for renderers and persistence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub coords: Coord,
    pub state: CellState,
    pub bonds: Bonds,
}

/// Square grid of [`Cell`]s plus the frontier of cells that may still grow.
///
/// The side length is `resolution + 2`; one ring is reserved for the
/// border. Cells are stored row-major (`i` outer, `j` inner) and never
/// reallocated.
#[derive(Clone, Debug)]
pub struct Grid {
    side: usize,
    border: Border,
    cells: Vec<Cell>,
    pub(crate) num_pieces: u32,
    pub(crate) active_cells: Vec<Coord>,
}

impl Grid {
    pub fn new(resolution: usize, border: Border) -> Self {
        let side = resolution + 2;
        let mut cells = Vec::with_capacity(side * side);
        for i in 0..side {
            for j in 0..side {
                cells.push(Cell::new(IVec2::new(i as i32, j as i32)));
            }
        }

        let mut grid = Self {
            side,
            border,
            cells,
            num_pieces: 0,
            active_cells: Vec::new(),
        };
        match border {
            Border::Rectangular => grid.apply_rectangular_border(),
            Border::Circular => grid.apply_circular_border(),
        }
        grid
    }

    /// Walls rows and columns `0` and `side - 1`.
    fn apply_rectangular_border(&mut self) {
        let last = self.side as i32 - 1;
        for cell in &mut self.cells {
            let IVec2 { x, y } = cell.coords;
            if x == 0 || y == 0 || x == last || y == last {
                cell.wall();
            }
        }
    }

    /// Walls every cell whose centre is farther than
    /// `side / 2 - CIRCLE_MARGIN` from the grid centre.
    fn apply_circular_border(&mut self) {
        let half = self.side as f64 / 2.0;
        let center = DVec2::splat(half - 0.5);
        let radius = half - CIRCLE_MARGIN;
        for cell in &mut self.cells {
            if (cell.coords.as_dvec2() - center).length() > radius {
                cell.wall();
            }
        }
    }

    /// Side length including the border ring.
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn resolution(&self) -> usize {
        self.side - 2
    }

    pub fn border(&self) -> Border {
        self.border
    }

    /// Number of pieces requested at seeding time.
    pub fn num_pieces(&self) -> u32 {
        self.num_pieces
    }

    /// Coordinates of the cells that will attempt to grow next generation.
    pub fn active_cells(&self) -> &[Coord] {
        &self.active_cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        let side = self.side as i32;
        if (0..side).contains(&coord.x) && (0..side).contains(&coord.y) {
            Some(coord.x as usize * self.side + coord.y as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).map(|idx| &self.cells[idx])
    }

    pub(crate) fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.index(coord).map(|idx| &mut self.cells[idx])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Whether `coord` is inside the grid and currently unclaimed.
    ///
    /// Walled cells and coordinates outside the grid count as occupied.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(|c| c.empty)
    }

    /// Bonds of the cell at `coord`; empty outside the grid.
    pub fn bonds_at(&self, coord: Coord) -> Bonds {
        self.cell(coord).map(|c| c.bonds).unwrap_or_default()
    }

    /// Claims the open cell `to` for the piece of `from` and records the
    /// reciprocal bond pair.
    pub(crate) fn link(&mut self, from: Coord, dir: Diagonal, piece: PieceId) -> Coord {
        let to = from + dir.offset();
        if let Some(target) = self.cell_mut(to) {
            target.claim(piece);
            target.bonds.insert(dir.opposite());
        }
        if let Some(source) = self.cell_mut(from) {
            source.bonds.insert(dir);
        }
        to
    }

    /// Occupied-cell count per piece.
    ///
    /// Unclaimed and walled cells are not included.
    pub fn count(&self) -> BTreeMap<PieceId, usize> {
        let mut counts = BTreeMap::new();
        for piece in self.cells.iter().filter_map(|c| c.color) {
            *counts.entry(piece).or_insert(0) += 1;
        }
        counts
    }

    pub fn walled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_walled()).count()
    }

    pub fn unclaimed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.empty).count()
    }

    pub fn snapshot(&self) -> Vec<CellSnapshot> {
        self.cells
            .iter()
            .map(|c| CellSnapshot {
                coords: c.coords,
                state: c.state(),
                bonds: c.bonds,
            })
            .collect()
    }

    /// Every bond `k` on a cell is matched by bond `(k + 2) mod 4` on the
    /// neighbour in direction `k`.
    pub fn bonds_are_reciprocal(&self) -> bool {
        self.cells.iter().all(|cell| {
            cell.bonds.iter().all(|dir| {
                self.cell(cell.neighbor(dir))
                    .is_some_and(|n| n.bonds.contains(dir.opposite()))
            })
        })
    }

    /// No two bonds cross each other.
    ///
    /// A bond from `(i, j)` to `(i + 1, j + 1)` crosses one between
    /// `(i, j + 1)` and `(i + 1, j)`; the other three directions mirror it.
    pub fn bonds_are_planar(&self) -> bool {
        self.cells.iter().all(|cell| {
            let (upper, lower) = self.vertical_bonds(cell.coords);
            cell.bonds
                .iter()
                .all(|dir| !crosses_vertical_bond(dir, upper, lower))
        })
    }

    /// Bonds of the cells at `coord + (0, 1)` and `coord - (0, 1)`.
    pub(crate) fn vertical_bonds(&self, coord: Coord) -> (Bonds, Bonds) {
        (
            self.bonds_at(coord + IVec2::Y),
            self.bonds_at(coord - IVec2::Y),
        )
    }

    /// No cell is left unclaimed.
    pub fn is_fully_covered(&self) -> bool {
        self.cells.iter().all(|c| !c.empty)
    }
}

/// Whether a bond in direction `dir` would cross a bond already held by the
/// cell above (`upper`) or below (`lower`).
///
/// Only the vertical axis is inspected. Because bonds are reciprocal this
/// still sees every crossing link.
pub(crate) fn crosses_vertical_bond(dir: Diagonal, upper: Bonds, lower: Bonds) -> bool {
    match dir {
        Diagonal::UpRight => upper.contains(Diagonal::DownRight),
        Diagonal::UpLeft => upper.contains(Diagonal::DownLeft),
        Diagonal::DownLeft => lower.contains(Diagonal::UpLeft),
        Diagonal::DownRight => lower.contains(Diagonal::UpRight),
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "resolution: {}, number of pieces: {}",
            self.side, self.num_pieces
        )
    }
}
