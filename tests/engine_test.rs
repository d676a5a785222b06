//! Tests for the game engine's rules and turn sequencing.

use tic_tac_two::{Board, Coord, Direction, GameConfig, GameEngine, Mark, Phase};

fn position(diagram: &str, origin: (usize, usize), to_move: Mark) -> GameEngine {
    let board: Board = diagram.parse().expect("valid diagram");
    GameEngine::from_position(GameConfig::default(), board, origin.into(), to_move)
        .expect("valid position")
}

/// Eight placements that fill the centered grid without a line, leaving (3,3) empty.
fn fill_without_line(game: &mut GameEngine) {
    for (x, y) in [(1, 1), (2, 1), (3, 1), (2, 2), (1, 2), (3, 2), (2, 3), (1, 3)] {
        assert!(game.place_piece(x, y), "placement at ({x}, {y}) rejected");
    }
}

#[test]
fn test_placement_alternates_turns() {
    let mut game = GameEngine::default();
    assert_eq!(game.current_mark(), Mark::X);

    assert!(game.place_piece(2, 2));
    assert_eq!(game.current_mark(), Mark::O);
    assert_eq!(game.pieces_placed(Mark::X), 1);

    assert!(game.place_piece(1, 1));
    assert_eq!(game.current_mark(), Mark::X);
    assert_eq!(game.pieces_placed(Mark::O), 1);
}

#[test]
fn test_placement_outside_grid_rejected() {
    let mut game = GameEngine::default();
    let before = game.clone();

    assert!(!game.place_piece(0, 0));
    assert!(!game.place_piece(4, 2));
    assert!(!game.place_piece(7, 7));
    assert_eq!(game, before);
}

#[test]
fn test_placement_on_occupied_cell_rejected() {
    let mut game = GameEngine::default();
    assert!(game.place_piece(2, 2));
    let before = game.clone();
    assert!(!game.place_piece(2, 2));
    assert_eq!(game, before);
}

#[test]
fn test_movement_unlocks_after_all_pieces_placed() {
    let mut game = GameEngine::default();
    fill_without_line(&mut game);

    assert!(game.movement_unlocked());
    assert_eq!(game.phase(), Phase::Moving);
    assert_eq!(game.pieces_placed(Mark::X), 4);
    assert_eq!(game.pieces_placed(Mark::O), 4);
    assert_eq!(game.winner(), None);

    // No pieces left to place, even on the one empty grid cell.
    assert!(!game.place_piece(3, 3));
    assert_eq!(game.current_mark(), Mark::X);
}

#[test]
fn test_select_then_move() {
    let mut game = GameEngine::default();
    fill_without_line(&mut game);

    // (2,1) is O's piece.
    assert!(!game.select_piece(2, 1));
    assert!(!game.move_piece(3, 3), "move without a selection");

    assert!(game.select_piece(1, 1));
    assert_eq!(game.selected(), Some(Coord::new(1, 1)));
    assert!(!game.move_piece(2, 2), "target occupied");
    assert!(!game.move_piece(4, 4), "target outside grid");
    assert_eq!(game.selected(), Some(Coord::new(1, 1)));

    assert!(game.move_piece(3, 3));
    assert_eq!(game.selected(), None);
    assert!(game.board().is_empty(Coord::new(1, 1)));
    assert_eq!(game.board().count(Mark::X), 4);
    assert_eq!(game.current_mark(), Mark::O);
    assert_eq!(game.pieces_placed(Mark::X), 4);
}

#[test]
fn test_reselect_replaces_selection() {
    let mut game = GameEngine::default();
    fill_without_line(&mut game);
    assert!(game.select_piece(1, 1));
    assert!(game.select_piece(3, 1));
    assert!(game.move_piece(3, 3));
    assert!(game.board().is_empty(Coord::new(3, 1)));
    assert!(!game.board().is_empty(Coord::new(1, 1)));
}

#[test]
fn test_row_win_scenario() {
    let mut game = GameEngine::default();
    assert!(game.place_piece(1, 1)); // X
    assert!(game.place_piece(2, 2)); // O
    assert!(game.place_piece(2, 1)); // X
    assert!(game.place_piece(1, 3)); // O
    assert!(game.place_piece(1, 2)); // X
    assert!(game.place_piece(3, 3)); // O
    assert_eq!(game.winner(), None);

    assert!(game.place_piece(3, 1)); // X completes row y=1
    assert_eq!(game.winner(), Some(Mark::X));
    assert_eq!(game.phase(), Phase::Finished(Mark::X));
    // The winner keeps the turn.
    assert_eq!(game.current_mark(), Mark::X);
}

#[test]
fn test_finished_game_is_frozen() {
    let mut game = position(
        ".....
         .XXX.
         .OO..
         .....
         .....",
        (1, 1),
        Mark::O,
    );
    assert_eq!(game.winner(), Some(Mark::X));
    let before = game.clone();

    assert!(!game.place_piece(3, 2));
    assert!(!game.select_piece(1, 2));
    assert!(!game.move_piece(3, 3));
    assert!(!game.shift_grid(Direction::South));
    assert_eq!(game, before);
}

#[test]
fn test_shift_moves_grid_and_passes_turn() {
    let mut game = GameEngine::default();
    fill_without_line(&mut game);
    let board = game.board().clone();

    assert!(game.shift_grid(Direction::NorthWest));
    assert_eq!(game.grid().origin(), Coord::new(0, 0));
    assert_eq!(game.board(), &board);
    assert_eq!(game.current_mark(), Mark::O);

    // Already in the corner.
    assert!(!game.shift_grid(Direction::North));
    assert!(!game.shift_grid(Direction::West));
    assert_eq!(game.current_mark(), Mark::O);
    assert_eq!(game.grid().origin(), Coord::new(0, 0));
}

#[test]
fn test_shift_uncovers_winning_line() {
    let mut game = position(
        ".XXX.
         .O.O.
         ..X..
         .O.O.
         .....",
        (1, 1),
        Mark::X,
    );
    assert_eq!(game.winner(), None);

    assert!(game.shift_grid(Direction::North));
    assert_eq!(game.winner(), Some(Mark::X));
}

#[test]
fn test_shift_can_hand_win_to_opponent() {
    let mut game = position(
        "O....
         .X.X.
         ..X..
         .....
         XOOO.",
        (1, 1),
        Mark::X,
    );
    assert_eq!(game.winner(), None);

    assert!(game.shift_grid(Direction::South));
    assert_eq!(game.winner(), Some(Mark::O));
    assert_eq!(game.current_mark(), Mark::X);
}

#[test]
fn test_line_crossing_grid_edge_does_not_win() {
    // O's row runs from x=2 to x=4 but the grid covers x=1..=3.
    let mut game = position(
        ".....
         .....
         .....
         ..OOO
         XX.X.",
        (1, 2),
        Mark::X,
    );
    assert_eq!(game.winner(), None);

    assert!(game.shift_grid(Direction::East));
    assert_eq!(game.winner(), Some(Mark::O));
}

#[test]
fn test_select_off_board_rejected() {
    let mut game = GameEngine::default();
    assert!(!game.select_piece(5, 5));
    assert!(!game.select_piece(usize::MAX, 0));
}

#[test]
fn test_larger_board_centers_grid() {
    let game = GameEngine::with_board_size(7).unwrap();
    assert_eq!(game.grid().origin(), Coord::new(2, 2));
    assert_eq!(game.board().size(), 7);
    assert!(GameEngine::with_board_size(1).is_err());
}
