//! Terminal-state detection.

use crate::board::{Board, Position};

impl Board {
    /// Whether no move can change the board: there is no empty cell and no
    /// two orthogonally adjacent cells hold the same value.
    pub fn is_terminal(&self) -> bool {
        self.empty_count() == 0
            && (0..self.rows()).all(|row| {
                (0..self.cols()).all(|col| !self.has_equal_neighbour(Position::new(row, col)))
            })
    }

    /// Whether any in-bounds orthogonal neighbour of `pos` holds the same value
    /// and the pair could merge (its double fits in `u32`).
    pub(crate) fn has_equal_neighbour(&self, pos: Position) -> bool {
        let value = self.values()[self.index(pos)];
        value.checked_mul(2).is_some()
            && self
                .neighbours(pos)
                .any(|n| self.values()[self.index(n)] == value)
    }

    /// The up to four orthogonal neighbours of `pos` that lie on the board.
    fn neighbours(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        let Position { row, col } = pos;
        [
            row.checked_sub(1).map(|r| Position::new(r, col)),
            (row + 1 < self.rows()).then(|| Position::new(row + 1, col)),
            col.checked_sub(1).map(|c| Position::new(row, c)),
            (col + 1 < self.cols()).then(|| Position::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_checkerboard_2x2_is_terminal() {
        let board = Board::from_rows(&[vec![2, 4], vec![4, 2]]).unwrap();
        assert!(board.is_terminal());
    }

    #[test]
    fn test_one_empty_cell_is_not_terminal() {
        let mut board = Board::from_rows(&[vec![2, 4], vec![4, 2]]).unwrap();
        board.set_value(Position::new(1, 1), 0).unwrap();
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_game_over_no_moves() {
        let board = Board::from_rows(&[
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
        ])
        .unwrap();
        assert!(board.is_terminal());
        assert!(board.legal_directions().is_empty());
    }

    #[test]
    fn test_full_board_with_horizontal_pair_is_not_terminal() {
        let board = Board::from_rows(&[
            vec![2, 2, 4, 8],
            vec![4, 8, 16, 32],
            vec![8, 16, 32, 64],
            vec![16, 32, 64, 128],
        ])
        .unwrap();
        assert!(!board.is_terminal());
        assert!(board.has_equal_neighbour(Position::new(0, 0)));
    }

    #[test]
    fn test_full_board_with_vertical_pair_is_not_terminal() {
        let board = Board::from_rows(&[
            vec![2, 4, 8, 16],
            vec![2, 8, 16, 32],
            vec![4, 16, 32, 64],
            vec![8, 32, 64, 128],
        ])
        .unwrap();
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_unmergeable_largest_pair_is_terminal() {
        let top = 1u32 << 31;
        let board = Board::from_rows(&[vec![top, top], vec![2, 4]]).unwrap();
        assert!(board.is_terminal());
        assert!(board.legal_directions().is_empty());
    }

    #[test]
    fn test_edges_are_excluded_from_neighbours() {
        let board = Board::new(3, 3).unwrap();
        assert_eq!(board.neighbours(Position::new(0, 0)).count(), 2);
        assert_eq!(board.neighbours(Position::new(0, 1)).count(), 3);
        assert_eq!(board.neighbours(Position::new(1, 1)).count(), 4);
        assert_eq!(board.neighbours(Position::new(2, 2)).count(), 2);

        let single = Board::from_rows(&[vec![2]]).unwrap();
        assert!(single.is_terminal());
    }

    #[test]
    fn test_terminal_iff_no_direction_changes_board() {
        let mut rng = SmallRng::seed_from_u64(31);
        for _ in 0..500 {
            let rows = rng.gen_range(1..=4usize);
            let cols = rng.gen_range(1..=4usize);
            let values: Vec<Vec<u32>> = (0..rows)
                .map(|_| {
                    (0..cols)
                        .map(|_| {
                            if rng.gen_bool(0.05) {
                                0
                            } else {
                                1 << rng.gen_range(1..=3u32)
                            }
                        })
                        .collect()
                })
                .collect();
            let board = Board::from_rows(&values).unwrap();
            if board.max_tile() == 0 {
                // Nothing to move, yet not terminal.
                continue;
            }
            let stuck = Direction::all().into_iter().all(|d| !board.can_slide(d));
            assert_eq!(board.is_terminal(), stuck, "{:?}", board);
        }
    }
}
