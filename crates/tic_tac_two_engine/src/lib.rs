//! Pure tic tac two game logic.
//!
//! Tic tac two is tic-tac-toe on a larger board with a movable 3×3 active
//! grid. Players place up to four pieces inside the grid; once both have
//! placed them all, a turn either moves one piece within the grid or slides
//! the grid one cell in any of eight directions. Three in a row inside the
//! grid wins.
//!
//! # Example
//!
//! ```
//! use tic_tac_two_engine::{GameEngine, GameRng, HeuristicAgent, Mark};
//!
//! let mut game = GameEngine::default();
//! assert!(game.place_piece(2, 2));
//! assert!(!game.place_piece(0, 0)); // outside the active grid
//!
//! let agent = HeuristicAgent::new(Mark::O);
//! let mut rng = GameRng::new(7);
//! let decision = agent.decide(&game.view(), &mut rng);
//! assert!(game.apply(decision));
//! assert_eq!(game.current_mark(), Mark::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod agent;
mod board;
mod config;
mod engine;
mod error;
mod grid;
mod rng;
pub mod rules;
mod types;

pub use action::{Decision, Phase};
pub use agent::HeuristicAgent;
pub use board::Board;
pub use config::{DEFAULT_BOARD_SIZE, GRID_SIZE, GameConfig, MAX_BOARD_SIZE, MAX_PIECES};
pub use engine::{GameEngine, GameView};
pub use error::{BoardParseError, EngineError, MoveError};
pub use grid::ActiveGrid;
pub use rng::{GameRng, RandomSource};
pub use types::{Cell, Coord, Direction, Mark};
