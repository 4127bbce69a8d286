//! Move directions and the (axis, anchor) pair each one selects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// The four possible move directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

/// Which lines a direction processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Each row is a line (left, right).
    Rows,
    /// Each column is a line (up, down).
    Columns,
}

/// The end of a line toward which tiles compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Index 0: left for rows, top for columns.
    First,
    /// Index n-1: right for rows, bottom for columns.
    Last,
}

impl Direction {
    /// Convert a u8 to a Direction (0=Up, 1=Down, 2=Left, 3=Right).
    /// Returns None for invalid values.
    pub fn from_u8(value: u8) -> Option<Direction> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Get all four directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Rows,
            Direction::Up | Direction::Down => Axis::Columns,
        }
    }

    pub fn anchor(self) -> Anchor {
        match self {
            Direction::Right | Direction::Down => Anchor::Last,
            Direction::Left | Direction::Up => Anchor::First,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Direction::from_u8(value).ok_or_else(|| GridError::InvalidDirection(value.to_string()))
    }
}

impl FromStr for Direction {
    type Err = GridError;

    /// Accepts `right`, `down`, `left` and `up`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(GridError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_u8() {
        assert_eq!(Direction::from_u8(0), Some(Direction::Up));
        assert_eq!(Direction::from_u8(1), Some(Direction::Down));
        assert_eq!(Direction::from_u8(2), Some(Direction::Left));
        assert_eq!(Direction::from_u8(3), Some(Direction::Right));
        assert_eq!(Direction::from_u8(4), None);
        assert_eq!(
            Direction::try_from(255u8),
            Err(GridError::InvalidDirection("255".into()))
        );
    }

    #[test]
    fn test_axis_and_anchor() {
        assert_eq!(Direction::Right.axis(), Axis::Rows);
        assert_eq!(Direction::Left.axis(), Axis::Rows);
        assert_eq!(Direction::Up.axis(), Axis::Columns);
        assert_eq!(Direction::Down.axis(), Axis::Columns);

        assert_eq!(Direction::Right.anchor(), Anchor::Last);
        assert_eq!(Direction::Down.anchor(), Anchor::Last);
        assert_eq!(Direction::Left.anchor(), Anchor::First);
        assert_eq!(Direction::Up.anchor(), Anchor::First);
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("right".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!(" Down\n".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("LEFT".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!(
            "north".parse::<Direction>(),
            Err(GridError::InvalidDirection("north".into()))
        );
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for dir in Direction::all() {
            assert_eq!(dir.to_string().parse::<Direction>(), Ok(dir));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Left).unwrap(), "\"left\"");
        let dir: Direction = serde_json::from_str("\"down\"").unwrap();
        assert_eq!(dir, Direction::Down);
    }
}
