//! Random tile insertion.

use log::debug;
use rand::Rng;

use crate::board::{Board, Position};
use crate::error::{GridError, Result};

/// Probability that a spawned tile is a 2 rather than a 4.
pub const TWO_PROBABILITY: f64 = 0.8;

/// Draw the value of a new tile: 2 with probability 0.8, otherwise 4.
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen::<f64>() < TWO_PROBABILITY {
        2
    } else {
        4
    }
}

impl Board {
    /// Place a 2 or 4 on an empty cell chosen uniformly at random.
    ///
    /// Fails with [`GridError::NoEmptyCell`] on a full board; callers are
    /// expected to check emptiness (or `is_terminal`) first.
    pub fn spawn_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Position> {
        let empty = self.empty_positions();
        if empty.is_empty() {
            return Err(GridError::NoEmptyCell);
        }

        let pos = empty[rng.gen_range(0..empty.len())];
        let value = random_tile_value(rng);
        let idx = self.index(pos);
        self.cells_mut()[idx] = value;
        debug!("spawned {} at ({}, {})", value, pos.row, pos.col);
        Ok(pos)
    }
}
