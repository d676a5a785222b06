//! Game rules for tic tac two.
//!
//! Pure functions over a board and the active grid, shared by the engine's
//! win check and the heuristic agent's lookahead.

pub mod win;

pub use win::{LINE_DIRECTIONS, completes_line, find_winner};
