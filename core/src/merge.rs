//! The compact-merge engine and move orchestration.
//!
//! One procedure handles all four directions. A line is walked in "anchor
//! order": logical index 0 is the anchor end, so for [`Anchor::Last`] the
//! line's positions are simply visited back to front.

use log::trace;

use crate::board::Board;
use crate::direction::{Anchor, Direction};

/// Compact and merge a standalone line of values toward `anchor`.
/// Returns the points earned (the sum of all merged tile values).
///
/// Two `2^31` tiles cannot be doubled within `u32`; they stay side by side.
///
/// ```
/// use grid_2048_core::{compact_line, Anchor};
///
/// let mut line = [2, 2, 2, 2];
/// assert_eq!(compact_line(&mut line, Anchor::Last), 8);
/// assert_eq!(line, [0, 0, 4, 4]);
/// ```
pub fn compact_line(values: &mut [u32], anchor: Anchor) -> u64 {
    let indices: Vec<usize> = (0..values.len()).collect();
    compact_indexed(values, &indices, anchor)
}

/// Compact the cells named by `indices` (in board order) toward `anchor`.
///
/// Two cursors walk the line: `slot` is the cell currently being filled and
/// `far` scans the remaining tiles. Once a slot receives a merged tile,
/// `slot` moves past it, so no tile merges twice in one pass.
pub(crate) fn compact_indexed(cells: &mut [u32], indices: &[usize], anchor: Anchor) -> u64 {
    let n = indices.len();
    let at = |k: usize| match anchor {
        Anchor::First => indices[k],
        Anchor::Last => indices[n - 1 - k],
    };

    let mut reward = 0;
    let mut slot = 0;
    let mut far = 1;
    while far < n {
        let held = cells[at(slot)];
        let incoming = cells[at(far)];
        match (incoming, held) {
            (0, _) => {}
            (v, 0) => {
                cells[at(slot)] = v;
                cells[at(far)] = 0;
            }
            (v, h) if v == h && v.checked_mul(2).is_some() => {
                let merged = v * 2;
                cells[at(slot)] = merged;
                cells[at(far)] = 0;
                reward += u64::from(merged);
                slot += 1;
            }
            (v, _) => {
                // Clear first: the destination may be `far` itself.
                cells[at(far)] = 0;
                cells[at(slot + 1)] = v;
                slot += 1;
            }
        }
        far += 1;
    }
    reward
}

impl Board {
    /// Slide every line toward the direction's anchor, merging equal neighbours.
    ///
    /// Returns whether any cell changed. The score grows by the value of every
    /// merged tile.
    pub fn slide(&mut self, direction: Direction) -> bool {
        let before = self.snapshot();
        let reward = self.apply_move(direction);
        let changed = self.differs_from(&before);
        trace!(
            "slide {}: changed={} reward={} score={}",
            direction,
            changed,
            reward,
            self.score()
        );
        changed
    }

    /// Whether sliding in `direction` would change the board.
    pub fn can_slide(&self, direction: Direction) -> bool {
        let mut probe = self.clone();
        probe.apply_move(direction);
        probe.values() != self.values()
    }

    /// Directions that would change the board, in `Direction::all()` order.
    pub fn legal_directions(&self) -> Vec<Direction> {
        Direction::all()
            .into_iter()
            .filter(|&d| self.can_slide(d))
            .collect()
    }

    /// Run the engine over every line for `direction` and credit the score.
    fn apply_move(&mut self, direction: Direction) -> u64 {
        let anchor = direction.anchor();
        let lines: Vec<Vec<usize>> = self
            .lines_for(direction)
            .iter()
            .map(|line| line.positions().iter().map(|&p| self.index(p)).collect())
            .collect();

        let cells = self.cells_mut();
        let reward: u64 = lines
            .iter()
            .map(|indices| compact_indexed(cells, indices, anchor))
            .sum();
        self.add_score(reward);
        reward
    }
}
