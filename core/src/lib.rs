//! # Sliding-Tile Merge Rule Engine
//!
//! The rules of 2048-style puzzles on a rectangular board of any size:
//! directional compaction with single-merge-per-tile semantics, weighted
//! random tile spawning, and terminal-state detection. Rendering and input
//! handling are left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use grid_2048_core::{Direction, Game};
//!
//! let mut game = Game::new(4, 4, 42).unwrap();  // 4x4 board, seed 42
//! let result = game.step(Direction::Left);
//! println!("Score: {}, Changed: {}", game.score(), result.changed);
//! ```
//!
//! Callers that drive the turn loop themselves use [`Board`] directly:
//! `slide`, then `spawn_with` only if the slide changed something, then
//! `is_terminal`.

use std::fmt;

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod line;
pub mod merge;
pub mod spawn;
pub mod terminal;

pub use board::{Board, Position, Snapshot};
pub use config::GameConfig;
pub use direction::{Anchor, Axis, Direction};
pub use error::{GridError, Result};
pub use line::Line;
pub use merge::compact_line;

/// Result of executing a step (move) in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the board changed (and a new tile was spawned).
    pub changed: bool,
    /// Points earned from merges in this move.
    pub reward: u64,
    /// Where the new tile landed, if one was spawned.
    pub spawned: Option<Position>,
    /// Whether the game is over (no move can change the board).
    pub done: bool,
}

/// A game session: one board plus the random source used for spawning.
#[derive(Clone)]
pub struct Game {
    board: Board,
    rng: SmallRng,
    initial_tiles: usize,
    still_playing: bool,
}

impl Game {
    /// Create a `rows x cols` game seeded with `seed`, starting with two tiles.
    pub fn new(rows: usize, cols: usize, seed: u64) -> Result<Self> {
        let config = GameConfig {
            rows,
            cols,
            ..GameConfig::default()
        };
        Game::from_config(&config.with_seed(seed))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let mut game = Game {
            board: Board::new(config.rows, config.cols)?,
            rng,
            initial_tiles: config.initial_tiles,
            still_playing: true,
        };
        game.populate()?;
        Ok(game)
    }

    /// Reset to a fresh board of the same size with a new seed.
    pub fn reset(&mut self, seed: u64) -> Result<()> {
        self.board = Board::new(self.board.rows(), self.board.cols())?;
        self.rng = SmallRng::seed_from_u64(seed);
        self.still_playing = true;
        self.populate()
    }

    /// Slide without spawning. Returns whether the board changed.
    pub fn slide(&mut self, direction: Direction) -> bool {
        self.board.slide(direction)
    }

    /// Spawn one tile from the session's RNG.
    pub fn spawn(&mut self) -> Result<Position> {
        self.board.spawn_with(&mut self.rng)
    }

    pub fn is_terminal(&self) -> bool {
        self.board.is_terminal()
    }

    /// Play one turn: slide, spawn if the slide changed anything, then check
    /// for the terminal state.
    ///
    /// A blocked move leaves the board untouched and spawns nothing. Once the
    /// board is terminal every step reports `done` without mutating.
    pub fn step(&mut self, direction: Direction) -> StepResult {
        if self.board.is_terminal() {
            return StepResult {
                changed: false,
                reward: 0,
                spawned: None,
                done: true,
            };
        }

        let score_before = self.board.score();
        let changed = self.board.slide(direction);
        let spawned = if changed { self.spawn().ok() } else { None };

        let done = self.board.is_terminal();
        if done {
            debug!("no moves left, final score {}", self.board.score());
        }

        StepResult {
            changed,
            reward: self.board.score() - score_before,
            spawned,
            done,
        }
    }

    /// Parse a direction token (`"left"`, `"UP"`, ...) and play it.
    /// An unrecognised token is rejected before any state changes.
    pub fn step_token(&mut self, token: &str) -> Result<StepResult> {
        let direction: Direction = token.parse()?;
        Ok(self.step(direction))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.board.score()
    }

    pub fn max_tile(&self) -> u32 {
        self.board.max_tile()
    }

    pub fn empty_count(&self) -> usize {
        self.board.empty_count()
    }

    pub fn legal_directions(&self) -> Vec<Direction> {
        self.board.legal_directions()
    }

    /// Caller-managed flag (e.g. for pausing). It has no effect on
    /// `is_terminal` or `step`.
    pub fn still_playing(&self) -> bool {
        self.still_playing
    }

    pub fn set_still_playing(&mut self, playing: bool) {
        self.still_playing = playing;
    }

    fn populate(&mut self) -> Result<()> {
        for _ in 0..self.initial_tiles {
            self.spawn()?;
        }
        Ok(())
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Game {{ score: {}, done: {}, still_playing: {} }}",
            self.board.score(),
            self.board.is_terminal(),
            self.still_playing
        )?;
        write!(f, "{:?}", self.board)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

// =============================================================================
// Tests
// =============================================================================
