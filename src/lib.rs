//! Tic Tac Two library - console driver for the movable-grid game
//!
//! The game rules live in [`tic_tac_two_engine`]; this crate seats players
//! around an engine and runs the game in a terminal.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **Console**: orchestrator, human and agent players, command parsing
//! - **Engine**: re-exported game types
//!
//! # Example
//!
//! ```no_run
//! use tic_tac_two::{AppConfig, Orchestrator, shared_input};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load(None)?;
//! let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
//! let input = shared_input(tokio::io::stdin());
//! let mut orchestrator = Orchestrator::from_config(&config, input, tx)?;
//! let winner = orchestrator.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app_config;
mod console;

// Crate-level exports - Configuration
pub use app_config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, Mode, Overrides};

// Crate-level exports - Console
pub use console::{
    AgentPlayer, Command, GameEvent, HELP, HumanPlayer, Orchestrator, ParseCommandError, Player,
    RULES, SharedInput, shared_input, status_message,
};

// Crate-level exports - Game types
pub use tic_tac_two_engine::{
    ActiveGrid, Board, Cell, Coord, Decision, Direction, GameConfig, GameEngine, GameRng, GameView,
    HeuristicAgent, Mark, MoveError, Phase, RandomSource,
};
