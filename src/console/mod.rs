//! Line-oriented console front end.
//!
//! Stands in for a graphical board: players type commands, the orchestrator
//! applies them to the engine and streams [`GameEvent`]s to a renderer.

pub mod command;
pub mod orchestrator;
pub mod players;

pub use command::{Command, HELP, ParseCommandError};
pub use orchestrator::{GameEvent, Orchestrator, status_message};
pub use players::{AgentPlayer, HumanPlayer, Player, SharedInput, shared_input};

/// Rules summary printed by `tic_tac_two rules`.
pub const RULES: &str = "\
TIC TAC TWO

The board is 5x5 with a 3x3 active grid, shown in [brackets].
Players X and O take turns; X moves first.

1. Placing: each player places 4 pieces, one per turn, on empty cells
   inside the active grid.
2. Moving: once both players have placed all pieces, a turn is either
   - moving one of your pieces to an empty cell inside the grid, or
   - sliding the grid one cell in any of eight directions.
3. Three in a row inside the active grid (row, column or diagonal) wins.
   Sliding the grid can win or lose the game: only pieces inside the
   grid count.";
