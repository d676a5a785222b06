//! Authoritative game state and rule enforcement.

use crate::action::{Decision, Phase};
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{EngineError, MoveError};
use crate::grid::ActiveGrid;
use crate::rules;
use crate::types::{Cell, Coord, Direction, Mark};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Read-only snapshot of the state a player needs to decide a turn.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    board: &'a Board,
    grid: ActiveGrid,
    placed: [usize; 2],
    max_pieces: usize,
}

impl<'a> GameView<'a> {
    /// Creates a view of `board` with the given grid.
    ///
    /// Pieces are never removed, so placed counts equal the marks on the board.
    pub fn new(board: &'a Board, grid: ActiveGrid, max_pieces: usize) -> Self {
        Self {
            board,
            grid,
            placed: [board.count(Mark::X), board.count(Mark::O)],
            max_pieces,
        }
    }

    /// The board.
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// The active grid.
    pub fn grid(&self) -> ActiveGrid {
        self.grid
    }

    /// Pieces `mark` has placed.
    pub fn pieces_placed(&self, mark: Mark) -> usize {
        self.placed[mark.index()]
    }

    /// Pieces each mark may place.
    pub fn max_pieces(&self) -> usize {
        self.max_pieces
    }
}

/// Tic tac two game engine.
///
/// Every mutator is all-or-nothing: a rejected call leaves the state
/// untouched. Once a winner is recorded the game is frozen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    grid: ActiveGrid,
    current: Mark,
    placed: [usize; 2],
    selected: Option<Coord>,
    winner: Option<Mark>,
}

impl GameEngine {
    /// Creates a game with the given dimensions: empty board, grid centered, X to move.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        info!("Starting new game");
        Self {
            board: Board::new(*config.board_size()),
            grid: ActiveGrid::centered(*config.grid_size(), *config.board_size()),
            config,
            current: Mark::X,
            placed: [0, 0],
            selected: None,
            winner: None,
        }
    }

    /// Creates a game on a `board_size` board.
    pub fn with_board_size(board_size: usize) -> Result<Self, EngineError> {
        Ok(Self::new(GameConfig::new(board_size)?))
    }

    /// Resumes a game from a position.
    ///
    /// Placed counts are taken from the board. The position is checked for a
    /// win once, so a position that already holds a line starts finished.
    #[instrument(skip(board))]
    pub fn from_position(
        config: GameConfig,
        board: Board,
        origin: Coord,
        to_move: Mark,
    ) -> Result<Self, EngineError> {
        let size = *config.board_size();
        if board.size() != size {
            return Err(EngineError::BoardSizeMismatch {
                expected: size,
                found: board.size(),
            });
        }
        let max = *config.max_pieces();
        for mark in Mark::iter() {
            let count = board.count(mark);
            if count > max {
                return Err(EngineError::TooManyPieces { mark, count, max });
            }
        }
        let grid = ActiveGrid::at(origin, *config.grid_size(), size)
            .ok_or(EngineError::GridOutOfBounds(origin))?;

        let mut engine = Self {
            placed: [board.count(Mark::X), board.count(Mark::O)],
            config,
            board,
            grid,
            current: to_move,
            selected: None,
            winner: None,
        };
        engine.check_for_win();
        Ok(engine)
    }

    /// Game dimensions.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active grid.
    pub fn grid(&self) -> ActiveGrid {
        self.grid
    }

    /// Mark to move.
    pub fn current_mark(&self) -> Mark {
        self.current
    }

    /// Pieces `mark` has placed.
    pub fn pieces_placed(&self, mark: Mark) -> usize {
        self.placed[mark.index()]
    }

    /// Pending selection from [`select_piece`](Self::select_piece).
    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    /// The winner, once there is one.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// True once both marks have placed every piece.
    pub fn movement_unlocked(&self) -> bool {
        let max = *self.config.max_pieces();
        self.placed.iter().all(|&count| count >= max)
    }

    /// Current phase, derived from counts and winner.
    pub fn phase(&self) -> Phase {
        match self.winner {
            Some(mark) => Phase::Finished(mark),
            None if self.movement_unlocked() => Phase::Moving,
            None => Phase::Placing,
        }
    }

    /// Returns true if `coord` lies inside the active grid.
    pub fn is_within_grid(&self, coord: Coord) -> bool {
        self.grid.contains(coord)
    }

    /// Snapshot for the agent.
    pub fn view(&self) -> GameView<'_> {
        GameView {
            board: &self.board,
            grid: self.grid,
            placed: self.placed,
            max_pieces: *self.config.max_pieces(),
        }
    }

    /// Places a piece for the current mark. Returns false if illegal.
    pub fn place_piece(&mut self, x: usize, y: usize) -> bool {
        report(self.try_place_piece(Coord::new(x, y)))
    }

    /// Selects one of the current mark's pieces for a later move.
    pub fn select_piece(&mut self, x: usize, y: usize) -> bool {
        report(self.try_select_piece(Coord::new(x, y)))
    }

    /// Moves the selected piece. Returns false if illegal.
    pub fn move_piece(&mut self, to_x: usize, to_y: usize) -> bool {
        report(self.try_move_piece(Coord::new(to_x, to_y)))
    }

    /// Slides the active grid one cell. Returns false if illegal.
    pub fn shift_grid(&mut self, direction: Direction) -> bool {
        report(self.try_shift_grid(direction))
    }

    /// Applies a decision through the mutators.
    ///
    /// A move selects its source first; if the move itself is rejected the
    /// selection is restored. `Pass` changes nothing and returns false.
    #[instrument(skip(self))]
    pub fn apply(&mut self, decision: Decision) -> bool {
        match decision {
            Decision::Place { to } => self.place_piece(to.x, to.y),
            Decision::Move { from, to } => {
                let previous = self.selected;
                if !self.select_piece(from.x, from.y) {
                    return false;
                }
                let moved = self.move_piece(to.x, to.y);
                if !moved {
                    self.selected = previous;
                }
                moved
            }
            Decision::Shift(direction) => self.shift_grid(direction),
            Decision::Pass => false,
        }
    }

    /// Places a piece, reporting why it was rejected.
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn try_place_piece(&mut self, at: Coord) -> Result<(), MoveError> {
        self.ensure_in_progress()?;
        self.ensure_in_grid(at)?;
        if !self.board.is_empty(at) {
            return Err(MoveError::CellOccupied(at));
        }
        let mark = self.current;
        if self.placed[mark.index()] >= *self.config.max_pieces() {
            return Err(MoveError::AllPiecesPlaced(mark));
        }

        self.board.set(at, Cell::Occupied(mark));
        self.placed[mark.index()] += 1;
        debug!(%at, placed = self.placed[mark.index()], "Piece placed");
        self.end_turn();
        Ok(())
    }

    /// Selects a piece, reporting why it was rejected.
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn try_select_piece(&mut self, at: Coord) -> Result<(), MoveError> {
        self.ensure_in_progress()?;
        match self.board.get(at) {
            None => Err(MoveError::OffBoard(at)),
            Some(Cell::Occupied(mark)) if mark == self.current => {
                self.selected = Some(at);
                debug!(%at, "Piece selected");
                Ok(())
            }
            Some(_) => Err(MoveError::NotOwnPiece(at)),
        }
    }

    /// Moves the selected piece, reporting why it was rejected.
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn try_move_piece(&mut self, to: Coord) -> Result<(), MoveError> {
        self.ensure_in_progress()?;
        let from = self.selected.ok_or(MoveError::NoSelection)?;
        self.ensure_in_grid(to)?;
        if !self.board.is_empty(to) {
            return Err(MoveError::CellOccupied(to));
        }

        self.board.set(from, Cell::Empty);
        self.board.set(to, Cell::Occupied(self.current));
        self.selected = None;
        debug!(%from, %to, "Piece moved");
        self.end_turn();
        Ok(())
    }

    /// Shifts the grid, reporting why it was rejected.
    ///
    /// The win check runs against the new grid position even though no piece
    /// moved: uncovering a line wins, and lines left outside stop counting.
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn try_shift_grid(&mut self, direction: Direction) -> Result<(), MoveError> {
        self.ensure_in_progress()?;
        let grid = self
            .grid
            .shifted(direction)
            .ok_or(MoveError::GridOutOfBounds(direction))?;

        self.grid = grid;
        debug!(origin = %grid.origin(), "Grid shifted");
        self.end_turn();
        Ok(())
    }

    fn ensure_in_progress(&self) -> Result<(), MoveError> {
        match self.winner {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }

    fn ensure_in_grid(&self, at: Coord) -> Result<(), MoveError> {
        if !self.board.contains(at) {
            Err(MoveError::OffBoard(at))
        } else if !self.grid.contains(at) {
            Err(MoveError::OutsideGrid(at))
        } else {
            Ok(())
        }
    }

    /// Runs the win check and hands the turn over unless someone won.
    fn end_turn(&mut self) {
        self.check_for_win();
        if self.winner.is_none() {
            self.current = self.current.opponent();
            self.selected = None;
        }
    }

    fn check_for_win(&mut self) {
        if let Some(mark) = rules::find_winner(&self.board, &self.grid) {
            info!(winner = %mark, "Game won");
            self.winner = Some(mark);
            self.selected = None;
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn report(result: Result<(), MoveError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            debug!(reason = %e, "Operation rejected");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let game = GameEngine::default();
        assert_eq!(game.current_mark(), Mark::X);
        assert_eq!(game.grid().origin(), Coord::new(1, 1));
        assert_eq!(game.phase(), Phase::Placing);
        assert_eq!(game.pieces_placed(Mark::O), 0);
        assert!(!game.movement_unlocked());
    }

    #[test]
    fn test_rejections_are_typed() {
        let mut game = GameEngine::default();
        let corner = Coord::new(0, 0);
        let off = Coord::new(9, 1);
        let center = Coord::new(2, 2);
        assert_eq!(game.try_place_piece(corner), Err(MoveError::OutsideGrid(corner)));
        assert_eq!(game.try_place_piece(off), Err(MoveError::OffBoard(off)));
        assert_eq!(game.try_move_piece(center), Err(MoveError::NoSelection));
        assert_eq!(game.try_select_piece(center), Err(MoveError::NotOwnPiece(center)));

        assert_eq!(game.try_place_piece(center), Ok(()));
        assert_eq!(game.try_place_piece(center), Err(MoveError::CellOccupied(center)));
    }

    #[test]
    fn test_apply_move_restores_selection_on_failure() {
        let board: Board = "
            .....
            .XO..
            .XO..
            .OX..
            .....
        "
        .parse()
        .unwrap();
        let config = GameConfig::default();
        let mut game = GameEngine::from_position(config, board, Coord::new(1, 1), Mark::X).unwrap();

        assert!(game.select_piece(2, 3));
        let blocked = Decision::Move {
            from: Coord::new(1, 1),
            to: Coord::new(2, 1),
        };
        assert!(!game.apply(blocked));
        assert_eq!(game.selected(), Some(Coord::new(2, 3)));
        assert_eq!(game.current_mark(), Mark::X);
    }

    #[test]
    fn test_from_position_validates() {
        let config = GameConfig::default();
        let small: Board = "...\n...\n...".parse().unwrap();
        assert!(matches!(
            GameEngine::from_position(config, small, Coord::new(0, 0), Mark::X),
            Err(EngineError::BoardSizeMismatch { expected: 5, found: 3 })
        ));

        let crowded: Board = "XXXXX\n.....\n.....\n.....\n.....".parse().unwrap();
        assert!(matches!(
            GameEngine::from_position(config, crowded, Coord::new(1, 1), Mark::O),
            Err(EngineError::TooManyPieces { mark: Mark::X, count: 5, max: 4 })
        ));

        assert_eq!(
            GameEngine::from_position(config, Board::new(5), Coord::new(3, 0), Mark::X),
            Err(EngineError::GridOutOfBounds(Coord::new(3, 0)))
        );
    }

    #[test]
    fn test_from_position_detects_existing_win() {
        let board: Board = ".....\n.OOO.\n.XX..\n.....\n.....".parse().unwrap();
        let config = GameConfig::default();
        let game = GameEngine::from_position(config, board, Coord::new(1, 1), Mark::X).unwrap();
        assert_eq!(game.phase(), Phase::Finished(Mark::O));
        assert_eq!(game.pieces_placed(Mark::O), 3);
    }
}
