//! Core domain types for tic tac two.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Player mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum Mark {
    /// First player (moves first).
    X,
    /// Second player.
    O,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Index into per-mark tables.
    pub(crate) fn index(self) -> usize {
        match self {
            Mark::X => 0,
            Mark::O => 1,
        }
    }

    /// Single-character symbol used in board diagrams.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Board coordinate: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Steps `steps` times along `(dx, dy)`.
    ///
    /// Returns `None` if the result would be negative.
    pub fn offset(self, (dx, dy): (isize, isize), steps: isize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx * steps)?;
        let y = self.y.checked_add_signed(dy * steps)?;
        Some(Self { x, y })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Direction the active grid can slide in.
///
/// North is towards row 0, west towards column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Direction {
    /// Up.
    North,
    /// Up and right.
    NorthEast,
    /// Right.
    East,
    /// Down and right.
    SouthEast,
    /// Down.
    South,
    /// Down and left.
    SouthWest,
    /// Left.
    West,
    /// Up and left.
    NorthWest,
}

impl Direction {
    /// Unit delta `(dx, dy)` for this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Parses a compass abbreviation (`n`, `ne`, ...) or full name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let direction = match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" | "up" => Direction::North,
            "ne" | "northeast" | "upright" => Direction::NorthEast,
            "e" | "east" | "right" => Direction::East,
            "se" | "southeast" | "downright" => Direction::SouthEast,
            "s" | "south" | "down" => Direction::South,
            "sw" | "southwest" | "downleft" => Direction::SouthWest,
            "w" | "west" | "left" => Direction::West,
            "nw" | "northwest" | "upleft" => Direction::NorthWest,
            _ => return None,
        };
        Some(direction)
    }
}
