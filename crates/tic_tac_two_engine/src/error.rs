//! Rejection and construction errors.

use crate::types::{Coord, Direction, Mark};

/// Why an engine operation was rejected.
///
/// The boolean mutators on [`GameEngine`](crate::GameEngine) collapse these
/// to `false`; the `try_*` variants return them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The coordinate is not on the board.
    #[display("{} is off the board", _0)]
    OffBoard(Coord),

    /// The coordinate is on the board but outside the active grid.
    #[display("{} is outside the active grid", _0)]
    OutsideGrid(Coord),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The cell does not hold the mark of the player to move.
    #[display("Cell {} does not hold the current player's piece", _0)]
    NotOwnPiece(Coord),

    /// A move was attempted without selecting a piece first.
    #[display("No piece selected")]
    NoSelection,

    /// The mark has no pieces left to place.
    #[display("Player {} has placed all pieces", _0)]
    AllPiecesPlaced(Mark),

    /// Shifting would move the grid off the board.
    #[display("Cannot shift grid {}: out of bounds", _0)]
    GridOutOfBounds(Direction),
}

impl std::error::Error for MoveError {}

/// Error constructing a game or position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Board must be at least as large as the active grid.
    #[display("Board size {} is smaller than the {}x{} grid", size, grid, grid)]
    BoardTooSmall {
        /// Requested board size.
        size: usize,
        /// Active grid size.
        grid: usize,
    },

    /// Board exceeds the supported size.
    #[display("Board size {} is larger than the maximum of {}", size, max)]
    BoardTooLarge {
        /// Requested board size.
        size: usize,
        /// Largest accepted size.
        max: usize,
    },

    /// Board dimensions do not match the configuration.
    #[display("Board is {}x{}, expected {}x{}", found, found, expected, expected)]
    BoardSizeMismatch {
        /// Configured size.
        expected: usize,
        /// Size of the supplied board.
        found: usize,
    },

    /// A mark has more pieces on the board than it may place.
    #[display("Player {} has {} pieces on the board, maximum is {}", mark, count, max)]
    TooManyPieces {
        /// Offending mark.
        mark: Mark,
        /// Pieces found.
        count: usize,
        /// Allowed maximum.
        max: usize,
    },

    /// The grid origin does not keep the grid on the board.
    #[display("Grid origin {} leaves the board", _0)]
    GridOutOfBounds(Coord),
}

impl std::error::Error for EngineError {}

/// Error parsing a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The diagram has no rows.
    #[display("Board diagram is empty")]
    Empty,

    /// A row's length differs from the number of rows.
    #[display("Row {} has {} cells, expected {}", row, found, expected)]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Cells in that row.
        found: usize,
        /// Number of rows.
        expected: usize,
    },

    /// Unrecognised cell character.
    #[display("Unexpected character {:?} in board diagram", _0)]
    BadCell(char),
}

impl std::error::Error for BoardParseError {}
