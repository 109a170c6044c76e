use crate::types::{Coord, PieceId};
use thiserror::Error;

/// Errors reported while placing seeds.
///
/// None of these invalidate seeds that were already placed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SeedError {
    /// One or more pieces found no open, sufficiently separated cell.
    #[error("could not place seeds for pieces {pieces:?} within {attempts} attempts each")]
    PlacementExhausted {
        /// Piece ids that were not placed, in ascending order.
        pieces: Vec<PieceId>,
        attempts: usize,
    },
    #[error("seed coordinate {coord} lies outside the grid")]
    OutOfBounds { coord: Coord },
    /// The requested cell is walled or already claimed.
    #[error("seed coordinate {coord} is not open")]
    Unavailable { coord: Coord },
    #[error("piece id {piece} is reserved")]
    ReservedPiece { piece: PieceId },
}

/// Invalid generation parameters.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("resolution must be at least 1")]
    ZeroResolution,
    #[error("growth probability must lie in [0, 1], got {0}")]
    GrowProbability(f64),
    #[error("minimum seed distance must be a non-negative number, got {0}")]
    MinDistance(f64),
    #[error("at most {max} pieces are supported, got {requested}")]
    TooManyPieces { requested: u32, max: u32 },
}
