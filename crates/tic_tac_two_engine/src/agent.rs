//! Heuristic opponent.
//!
//! One-ply lookahead with a fixed priority: block the opponent while placing,
//! then win if a single move wins, block if the opponent threatens, and
//! otherwise move or shift at random.

use crate::action::Decision;
use crate::engine::GameView;
use crate::rng::RandomSource;
use crate::rules::completes_line;
use crate::types::{Cell, Coord, Mark};
use tracing::{debug, instrument};

/// Computer player for one mark.
///
/// Stateless between turns; every call works from the view it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicAgent {
    mark: Mark,
}

impl HeuristicAgent {
    /// Creates an agent playing `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }

    /// The mark this agent plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Decides this turn's action.
    ///
    /// Random draws happen in a fixed order so a scripted source reproduces a
    /// decision: placement draws one index (target); the movement block draws
    /// one (piece); the movement fallback draws piece, target, direction, then
    /// the option index.
    #[instrument(skip(self, view, rng), fields(mark = %self.mark))]
    pub fn decide<R: RandomSource>(&self, view: &GameView<'_>, rng: &mut R) -> Decision {
        let decision = if view.pieces_placed(self.mark) < view.max_pieces() {
            self.decide_placement(view, rng)
        } else {
            self.decide_movement(view, rng)
        };
        debug!(%decision, "Agent decided");
        decision
    }

    fn decide_placement<R: RandomSource>(&self, view: &GameView<'_>, rng: &mut R) -> Decision {
        if let Some(to) = find_threat(view, self.mark.opponent()) {
            debug!(%to, "Blocking placement");
            return Decision::Place { to };
        }
        match rng.choose(&empty_cells(view)) {
            Some(&to) => Decision::Place { to },
            None => Decision::Pass,
        }
    }

    fn decide_movement<R: RandomSource>(&self, view: &GameView<'_>, rng: &mut R) -> Decision {
        if let Some((from, to)) = self.find_winning_move(view) {
            debug!(%from, %to, "Winning move");
            return Decision::Move { from, to };
        }

        let pieces = self.pieces_in_grid(view);
        if let Some(to) = find_threat(view, self.mark.opponent()) {
            if let Some(&from) = rng.choose(&pieces) {
                debug!(%from, %to, "Blocking move");
                return Decision::Move { from, to };
            }
        }

        let mut options = Vec::with_capacity(2);
        let targets = empty_cells(view);
        if !pieces.is_empty() && !targets.is_empty() {
            if let (Some(&from), Some(&to)) = (rng.choose(&pieces), rng.choose(&targets)) {
                options.push(Decision::Move { from, to });
            }
        }
        if let Some(&direction) = rng.choose(&view.grid().valid_shifts()) {
            options.push(Decision::Shift(direction));
        }
        rng.choose(&options).copied().unwrap_or(Decision::Pass)
    }

    /// First (piece, target) pair, in scan order, that completes a line.
    fn find_winning_move(&self, view: &GameView<'_>) -> Option<(Coord, Coord)> {
        let grid = view.grid();
        let targets = empty_cells(view);
        self.pieces_in_grid(view).into_iter().find_map(|from| {
            let mut board = view.board().clone();
            board.set(from, Cell::Empty);
            targets
                .iter()
                .find(|&&to| completes_line(&board, &grid, to, self.mark))
                .map(|&to| (from, to))
        })
    }

    fn pieces_in_grid(&self, view: &GameView<'_>) -> Vec<Coord> {
        let grid = view.grid();
        view.board()
            .pieces(self.mark)
            .into_iter()
            .filter(|&coord| grid.contains(coord))
            .collect()
    }
}

/// Empty cells inside the grid, by ascending x then ascending y.
fn empty_cells(view: &GameView<'_>) -> Vec<Coord> {
    view.grid()
        .cells()
        .filter(|&coord| view.board().is_empty(coord))
        .collect()
}

/// First empty in-grid cell where `mark` would complete a line.
fn find_threat(view: &GameView<'_>, mark: Mark) -> Option<Coord> {
    let grid = view.grid();
    empty_cells(view)
        .into_iter()
        .find(|&coord| completes_line(view.board(), &grid, coord, mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::grid::ActiveGrid;

    /// Always picks the first option.
    struct First;

    impl RandomSource for First {
        fn pick_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn view_of(board: &Board) -> GameView<'_> {
        GameView::new(board, ActiveGrid::centered(3, 5), 4)
    }

    #[test]
    fn test_random_placement_on_empty_board() {
        let board = Board::new(5);
        let decision = HeuristicAgent::new(Mark::O).decide(&view_of(&board), &mut First);
        assert_eq!(decision, Decision::Place { to: Coord::new(1, 1) });
    }

    #[test]
    fn test_pass_when_grid_full_while_placing() {
        let board: Board = ".....\n.XOX.\n.OXO.\n.XOX.\n.....".parse().unwrap();
        let view = GameView::new(&board, ActiveGrid::centered(3, 5), 6);
        assert_eq!(HeuristicAgent::new(Mark::O).decide(&view, &mut First), Decision::Pass);
    }

    #[test]
    fn test_find_threat_ignores_own_lines() {
        let board: Board = ".....\n.OO..\n.....\n.....\n.....".parse().unwrap();
        let view = view_of(&board);
        assert_eq!(find_threat(&view, Mark::X), None);
        assert_eq!(find_threat(&view, Mark::O), Some(Coord::new(3, 1)));
    }
}
