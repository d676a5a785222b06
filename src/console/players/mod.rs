//! Player trait and implementations.

mod agent;
mod human;

pub use agent::AgentPlayer;
pub use human::{HumanPlayer, SharedInput, shared_input};

use super::command::Command;
use anyhow::Result;
use tic_tac_two_engine::GameEngine;

/// Trait for players that can take turns.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets the next command from this player.
    ///
    /// Called repeatedly within a turn until the turn passes, so a human can
    /// select and then move.
    async fn next_command(&mut self, game: &GameEngine) -> Result<Command>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True for computer players.
    fn is_agent(&self) -> bool {
        false
    }
}
