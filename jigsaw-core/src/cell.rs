use crate::types::{Coord, Diagonal, PieceId};
use serde::{Deserialize, Serialize};

/// Set of diagonal directions in which a cell has a growth link.
///
/// Stored as a 4-bit mask indexed by [`Diagonal::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bonds(u8);

impl Bonds {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn contains(self, dir: Diagonal) -> bool {
        self.0 & (1 << dir.index()) != 0
    }

    pub fn insert(&mut self, dir: Diagonal) {
        self.0 |= 1 << dir.index();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Bonded directions in index order.
    pub fn iter(self) -> impl Iterator<Item = Diagonal> {
        Diagonal::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    /// Directions without a bond, in index order.
    pub fn missing(self) -> impl Iterator<Item = Diagonal> {
        Diagonal::ALL.into_iter().filter(move |d| !self.contains(*d))
    }
}

impl FromIterator<Diagonal> for Bonds {
    fn from_iter<I: IntoIterator<Item = Diagonal>>(iter: I) -> Self {
        let mut bonds = Bonds::empty();
        for d in iter {
            bonds.insert(d);
        }
        bonds
    }
}

// Serialized as the list of bond indices, which is what renderers expect.
impl Serialize for Bonds {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(Diagonal::index))
    }
}

impl<'de> Deserialize<'de> for Bonds {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let indices = Vec::<usize>::deserialize(deserializer)?;
        indices
            .into_iter()
            .map(|i| {
                Diagonal::from_index(i).ok_or_else(|| {
                    <D::Error as serde::de::Error>::custom(format!("bond index {i} out of range"))
                })
            })
            .collect()
    }
}

/// Occupancy of a cell, derived from its flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// Border or mask cell; never claimed, never grows.
    Walled,
    /// Not yet claimed by any piece.
    Unclaimed,
    Claimed { piece: PieceId, active: bool },
}

/// A single grid position.
#[derive(Clone, Debug)]
pub struct Cell {
    pub coords: Coord,
    pub color: Option<PieceId>,
    pub active: bool,
    pub empty: bool,
    pub bonds: Bonds,
}

impl Cell {
    pub fn new(coords: Coord) -> Self {
        Self {
            coords,
            color: None,
            active: true,
            empty: true,
            bonds: Bonds::empty(),
        }
    }

    /// Coordinate of the diagonal neighbour in direction `dir`.
    ///
    /// The coordinate may lie outside the grid for cells on the outer ring.
    pub fn neighbor(&self, dir: Diagonal) -> Coord {
        self.coords + dir.offset()
    }

    /// The four diagonal neighbour coordinates in [`Diagonal`] order.
    pub fn neighbors(&self) -> [Coord; 4] {
        Diagonal::ALL.map(|d| self.neighbor(d))
    }

    pub(crate) fn wall(&mut self) {
        self.active = false;
        self.empty = false;
    }

    pub fn is_walled(&self) -> bool {
        !self.empty && self.color.is_none()
    }

    /// Unclaimed and not walled.
    pub fn is_open(&self) -> bool {
        self.empty && self.active
    }

    /// Assigns the cell to `piece` and makes it eligible to grow.
    ///
    /// Only valid on an open cell; colour is never reassigned.
    pub(crate) fn claim(&mut self, piece: PieceId) {
        debug_assert!(self.is_open(), "claiming non-open cell {:?}", self.coords);
        self.color = Some(piece);
        self.empty = false;
        self.active = true;
    }

    pub fn state(&self) -> CellState {
        match self.color {
            Some(piece) => CellState::Claimed {
                piece,
                active: self.active,
            },
            None if self.empty => CellState::Unclaimed,
            None => CellState::Walled,
        }
    }

    /// Integer colour code: `-1` for walled, `0` for unclaimed, otherwise
    /// the piece id.
    pub fn color_code(&self) -> i64 {
        match self.state() {
            CellState::Walled => -1,
            CellState::Unclaimed => 0,
            CellState::Claimed { piece, .. } => i64::from(piece),
        }
    }
}
