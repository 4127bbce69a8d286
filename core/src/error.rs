//! Error type shared by every board operation.

use thiserror::Error;

/// Everything that can go wrong while building, reading or mutating a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A position outside `[0, rows) x [0, cols)` was addressed.
    #[error("position ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// A direction token or code that is not one of right, down, left, up.
    #[error("invalid direction: {0:?} (expected right, down, left or up)")]
    InvalidDirection(String),
    /// `spawn` was called on a board with no empty cell.
    #[error("cannot spawn a tile: the board has no empty cell")]
    NoEmptyCell,
    /// A cell value that is neither 0 nor a power of two >= 2.
    #[error("invalid tile value {0}: must be 0 or a power of two >= 2")]
    InvalidTile(u32),
    #[error("invalid board dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, GridError>;
