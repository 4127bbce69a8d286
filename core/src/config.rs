//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// How to set up a [`Game`](crate::Game).
///
/// Every field has a default, so a partial document such as `{"rows": 5}`
/// deserializes to a 5x4 board with two starting tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Seed for the spawn RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Tiles spawned before the first move.
    pub initial_tiles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 4,
            cols: 4,
            seed: None,
            initial_tiles: 2,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.initial_tiles > self.rows * self.cols {
            return Err(GridError::NoEmptyCell);
        }
        Ok(())
    }
}
