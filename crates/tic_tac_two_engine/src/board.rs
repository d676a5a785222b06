//! Board storage.

use crate::error::BoardParseError;
use crate::grid::ActiveGrid;
use crate::types::{Cell, Coord, Mark};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Square board of cells.
///
/// The engine owns the only mutable board; everyone else sees `&Board`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size` × `size` board. Callers bound `size` through
    /// [`GameConfig`](crate::GameConfig) or a parsed diagram.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `coord` is on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// Gets the cell at `coord`, or `None` if off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.contains(coord).then(|| self.cells[coord.y * self.size + coord.x])
    }

    /// Returns true if `coord` is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Overwrites a cell. Off-board coordinates are ignored.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        if self.contains(coord) {
            self.cells[coord.y * self.size + coord.x] = cell;
        }
    }

    /// Coordinates holding `mark`, by ascending x then ascending y.
    pub fn pieces(&self, mark: Mark) -> Vec<Coord> {
        (0..self.size)
            .flat_map(|x| (0..self.size).map(move |y| Coord::new(x, y)))
            .filter(|&coord| self.get(coord) == Some(Cell::Occupied(mark)))
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Occupied(mark))
            .count()
    }

    /// Formats the board with the active grid's cells bracketed.
    ///
    /// Column numbers run along the top, row numbers down the left side.
    pub fn render(&self, grid: &ActiveGrid) -> String {
        let mut out = String::from("   ");
        for x in 0..self.size {
            out.push_str(&format!(" {x} "));
        }
        out.push('\n');
        for y in 0..self.size {
            out.push_str(&format!("{y:>2} "));
            for x in 0..self.size {
                let coord = Coord::new(x, y);
                let symbol = self
                    .get(coord)
                    .and_then(Cell::mark)
                    .map_or('.', Mark::symbol);
                if grid.contains(coord) {
                    out.push_str(&format!("[{symbol}]"));
                } else {
                    out.push_str(&format!(" {symbol} "));
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Parses a diagram with one line per row: `X`, `O`, or `.` per cell.
///
/// Spaces inside a row and blank lines are ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(BoardParseError::Empty);
        }

        let size = rows.len();
        let mut board = Board::new(size);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(BoardParseError::NotSquare {
                    row: y,
                    found: row.len(),
                    expected: size,
                });
            }
            for (x, &c) in row.iter().enumerate() {
                let cell = match c {
                    '.' | '_' => Cell::Empty,
                    'X' | 'x' => Cell::Occupied(Mark::X),
                    'O' | 'o' => Cell::Occupied(Mark::O),
                    other => return Err(BoardParseError::BadCell(other)),
                };
                board.set(Coord::new(x, y), cell);
            }
        }
        Ok(board)
    }
}
