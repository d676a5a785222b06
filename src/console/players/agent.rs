//! Heuristic agent seated as a player.

use super::Player;
use crate::console::command::Command;
use anyhow::Result;
use std::time::Duration;
use tic_tac_two_engine::{GameEngine, GameRng, HeuristicAgent, Mark};
use tracing::{debug, instrument};

/// Computer player backed by [`HeuristicAgent`].
pub struct AgentPlayer {
    name: String,
    agent: HeuristicAgent,
    rng: GameRng,
    delay: Duration,
}

impl AgentPlayer {
    /// Creates an agent for `mark` that waits `delay` before each turn.
    #[instrument(skip(name, rng), fields(rng_seed = rng.seed()))]
    pub fn new(name: impl Into<String>, mark: Mark, rng: GameRng, delay: Duration) -> Self {
        Self {
            name: name.into(),
            agent: HeuristicAgent::new(mark),
            rng,
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for AgentPlayer {
    async fn next_command(&mut self, game: &GameEngine) -> Result<Command> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let decision = self.agent.decide(&game.view(), &mut self.rng);
        debug!(agent = %self.name, %decision, "Agent chose");
        Ok(Command::Play(decision))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_agent(&self) -> bool {
        true
    }
}
