use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Grid coordinate `(i, j)` of a [`crate::cell::Cell`].
///
/// Coordinates are plain values; they are resolved to a cell through
/// [`crate::grid::Grid::cell`] at the moment of use.
pub type Coord = IVec2;

/// Identifier of a piece. Real pieces are numbered from `1`.
pub type PieceId = u32;

/// Reserved piece id for the regions created by
/// [`crate::completer::complete`]. Never handed out by the seeder.
pub const FILLER_PIECE: PieceId = PieceId::MAX;

/// One of the four diagonal neighbour directions of a cell.
///
/// The discriminants are the neighbour indices and their order is fixed:
/// bonds are recorded relative to it, so a bond in direction `k` on one
/// cell is matched by a bond in direction [`Diagonal::opposite`] on the
/// neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Diagonal {
    /// `(+1, +1)`
    UpRight = 0,
    /// `(-1, +1)`
    UpLeft = 1,
    /// `(-1, -1)`
    DownLeft = 2,
    /// `(+1, -1)`
    DownRight = 3,
}

impl Diagonal {
    /// All directions in index order.
    pub const ALL: [Diagonal; 4] = [
        Diagonal::UpRight,
        Diagonal::UpLeft,
        Diagonal::DownLeft,
        Diagonal::DownRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Direction `(k + 2) mod 4`, pointing back at the originating cell.
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 2) % 4]
    }

    pub fn offset(self) -> IVec2 {
        match self {
            Diagonal::UpRight => IVec2::new(1, 1),
            Diagonal::UpLeft => IVec2::new(-1, 1),
            Diagonal::DownLeft => IVec2::new(-1, -1),
            Diagonal::DownRight => IVec2::new(1, -1),
        }
    }
}
