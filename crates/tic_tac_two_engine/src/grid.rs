//! The movable 3×3 active grid.

use crate::types::{Coord, Direction};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Square window of the board where placement and movement are legal.
///
/// The origin is the top-left cell; the whole window always lies on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveGrid {
    origin: Coord,
    size: usize,
    board_size: usize,
}

impl ActiveGrid {
    /// Creates a grid centered on the board.
    pub fn centered(size: usize, board_size: usize) -> Self {
        let start = board_size.saturating_sub(size) / 2;
        Self {
            origin: Coord::new(start, start),
            size,
            board_size,
        }
    }

    /// Creates a grid at `origin`, or `None` if it would leave the board.
    pub fn at(origin: Coord, size: usize, board_size: usize) -> Option<Self> {
        let fits = |start: usize| start + size <= board_size;
        (fits(origin.x) && fits(origin.y)).then_some(Self {
            origin,
            size,
            board_size,
        })
    }

    /// Top-left cell.
    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        (self.origin.x..self.origin.x + self.size).contains(&coord.x)
            && (self.origin.y..self.origin.y + self.size).contains(&coord.y)
    }

    /// The grid moved one step in `direction`, if it stays on the board.
    pub fn shifted(&self, direction: Direction) -> Option<Self> {
        let origin = self.origin.offset(direction.delta(), 1)?;
        Self::at(origin, self.size, self.board_size)
    }

    /// Directions the grid can shift in without leaving the board.
    pub fn valid_shifts(&self) -> Vec<Direction> {
        Direction::iter()
            .filter(|&direction| self.shifted(direction).is_some())
            .collect()
    }

    /// Cells inside the grid, by ascending x then ascending y.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let Coord { x: gx, y: gy } = self.origin;
        (gx..gx + self.size).flat_map(move |x| (gy..gy + self.size).map(move |y| Coord::new(x, y)))
    }
}
