//! Board storage: a dense row-major grid of tile values plus the score.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

/// Whether `value` may be stored in a cell: 0 (empty) or `2^k` for `k >= 1`.
#[inline]
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// The game board.
///
/// Cells are stored in a flat `Vec` in row-major order: index `row * cols + col`.
/// Every position in range always has exactly one value; empty cells are 0.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
    score: u64,
}

/// An immutable copy of all cell values, used to detect whether a move changed anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Snapshot {
    rows: usize,
    cols: usize,
    values: Box<[u32]>,
}

impl Snapshot {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major values.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn get(&self, pos: Position) -> Option<u32> {
        (pos.row < self.rows && pos.col < self.cols)
            .then(|| self.values[pos.row * self.cols + pos.col])
    }
}

impl Board {
    /// Create an empty `rows x cols` board with score 0.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![0; rows * cols],
            score: 0,
        })
    }

    /// Build a board from nested rows. All rows must have the same, non-zero length
    /// and every value must be a valid tile.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut board = Board::new(rows.len(), cols)?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::InvalidDimensions {
                    rows: rows.len(),
                    cols: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                board.set_value(Position::new(r, c), value)?;
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total points earned from merges so far.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Row-major view of every cell.
    pub fn values(&self) -> &[u32] {
        &self.cells
    }

    /// The values as nested rows, for rendering.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.cols).map(<[u32]>::to_vec).collect()
    }

    pub fn value_at(&self, pos: Position) -> Result<u32> {
        let idx = self.checked_index(pos)?;
        Ok(self.cells[idx])
    }

    /// Store `value` at `pos`. The value must be 0 or a power of two >= 2.
    pub fn set_value(&mut self, pos: Position, value: u32) -> Result<()> {
        if !is_valid_tile(value) {
            return Err(GridError::InvalidTile(value));
        }
        let idx = self.checked_index(pos)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// All positions currently holding 0, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| self.position_of(i))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Largest tile on the board, 0 if it is empty.
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: self.rows,
            cols: self.cols,
            values: self.cells.clone().into_boxed_slice(),
        }
    }

    /// Whether the current values differ from `snapshot`.
    pub fn differs_from(&self, snapshot: &Snapshot) -> bool {
        self.cells[..] != snapshot.values[..]
    }

    // -------------------------------------------------------------------------
    // Crate-internal accessors used by the move engine
    // -------------------------------------------------------------------------

    #[inline]
    pub(crate) fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.row < self.rows && pos.col < self.cols);
        pos.row * self.cols + pos.col
    }

    #[inline]
    pub(crate) fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u32] {
        &mut self.cells
    }

    pub(crate) fn add_score(&mut self, points: u64) {
        self.score += points;
    }

    fn checked_index(&self, pos: Position) -> Result<usize> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return Err(GridError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.index(pos))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ {}x{}, score: {} }}",
            self.rows, self.cols, self.score
        )?;
        for row in self.cells.chunks(self.cols) {
            for &val in row {
                if val == 0 {
                    write!(f, "    .")?;
                } else {
                    write!(f, "{:5}", val)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("+{}", "------+".repeat(self.cols));
        writeln!(f, "Score: {}", self.score)?;
        writeln!(f, "{}", border)?;
        for row in self.cells.chunks(self.cols) {
            write!(f, "|")?;
            for &val in row {
                if val == 0 {
                    write!(f, "      |")?;
                } else {
                    write!(f, "{:^6}|", val)?;
                }
            }
            writeln!(f)?;
            writeln!(f, "{}", border)?;
        }
        Ok(())
    }
}
