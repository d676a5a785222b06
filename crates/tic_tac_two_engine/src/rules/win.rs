//! Win detection inside the active grid.

use crate::board::Board;
use crate::grid::ActiveGrid;
use crate::types::{Cell, Coord, Mark};
use tracing::instrument;

/// Marks in a row needed to win.
pub const WIN_LENGTH: isize = 3;

/// Forward line directions: horizontal, vertical, and both diagonals.
pub const LINE_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// True if `WIN_LENGTH` cells from `start` along `dir` are in the grid and hold `mark`.
///
/// `assume` is treated as holding `mark` regardless of the board.
fn line_from(
    board: &Board,
    grid: &ActiveGrid,
    start: Coord,
    dir: (isize, isize),
    mark: Mark,
    assume: Option<Coord>,
) -> bool {
    (0..WIN_LENGTH).all(|i| {
        start.offset(dir, i).is_some_and(|coord| {
            grid.contains(coord)
                && (Some(coord) == assume || board.get(coord) == Some(Cell::Occupied(mark)))
        })
    })
}

/// Finds the winner inside the active grid.
///
/// Scans grid cells by ascending x then ascending y and returns the mark of
/// the first occupied cell that starts a line, so simultaneous lines resolve
/// by scan order.
#[instrument(skip(board))]
pub fn find_winner(board: &Board, grid: &ActiveGrid) -> Option<Mark> {
    grid.cells().find_map(|coord| {
        let mark = board.get(coord)?.mark()?;
        LINE_DIRECTIONS
            .iter()
            .any(|&dir| line_from(board, grid, coord, dir, mark, None))
            .then_some(mark)
    })
}

/// True if `mark` at `at` would complete a line inside the grid.
///
/// Every line through `at` is considered, whatever position `at` takes in it.
/// The other cells are read from `board`; `at` itself is treated as holding
/// `mark`.
pub fn completes_line(board: &Board, grid: &ActiveGrid, at: Coord, mark: Mark) -> bool {
    if !grid.contains(at) {
        return false;
    }
    LINE_DIRECTIONS.iter().any(|&dir| {
        (0..WIN_LENGTH).any(|back| {
            at.offset(dir, -back)
                .is_some_and(|start| line_from(board, grid, start, dir, mark, Some(at)))
        })
    })
}
