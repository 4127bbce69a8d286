//! Line traversal: rows and columns as ordered sequences of positions.
//!
//! Lines are always produced in board order (left to right, top to bottom).
//! Which end tiles compact toward is decided by the move engine from the
//! direction's [`Anchor`](crate::direction::Anchor).

use crate::board::{Board, Position};
use crate::direction::{Axis, Direction};

/// One row or column of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    positions: Vec<Position>,
}

impl Line {
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Board {
    /// `(row, 0), (row, 1), ..., (row, cols - 1)`.
    pub fn row_line(&self, row: usize) -> Line {
        Line {
            positions: (0..self.cols()).map(|c| Position::new(row, c)).collect(),
        }
    }

    /// `(0, col), (1, col), ..., (rows - 1, col)`.
    pub fn column_line(&self, col: usize) -> Line {
        Line {
            positions: (0..self.rows()).map(|r| Position::new(r, col)).collect(),
        }
    }

    /// Every line a move in `direction` processes: all rows for left/right,
    /// all columns for up/down.
    pub fn lines_for(&self, direction: Direction) -> Vec<Line> {
        match direction.axis() {
            Axis::Rows => (0..self.rows()).map(|r| self.row_line(r)).collect(),
            Axis::Columns => (0..self.cols()).map(|c| self.column_line(c)).collect(),
        }
    }
}
