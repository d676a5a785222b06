//! Game orchestration between players.

use super::command::{Command, HELP};
use super::players::{AgentPlayer, HumanPlayer, Player, SharedInput};
use crate::app_config::{AppConfig, Mode};
use anyhow::Result;
use std::time::Duration;
use tic_tac_two_engine::{Decision, GameEngine, GameRng, Mark, Phase};
use tokio::io::AsyncRead;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, instrument};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Board redrawn.
    StateChanged(String),
    /// Status line for the players.
    Message(String),
    /// Agent is thinking.
    AgentThinking(Mark),
    /// A player's action was applied.
    ActionTaken {
        /// Who acted.
        mark: Mark,
        /// What they did.
        decision: Decision,
    },
    /// Game ended.
    GameOver {
        /// Winner, or `None` if the game was abandoned or hit the turn limit.
        winner: Option<Mark>,
        /// Completed turns.
        turns: u32,
        /// Time from the first applied action to the end; zero if nobody acted.
        elapsed: Duration,
    },
}

/// Result of handling one command.
enum Step {
    Continue,
    Stop,
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: GameEngine,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    max_turns: Option<u32>,
    turns: u32,
    started: Option<Instant>,
}

impl Orchestrator {
    /// Creates an orchestrator for a fresh game.
    pub fn new(
        game: GameEngine,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game,
            player_x,
            player_o,
            event_tx,
            max_turns: None,
            turns: 0,
            started: None,
        }
    }

    /// Ends the game without a winner after `max_turns` turns.
    pub fn with_max_turns(mut self, max_turns: Option<u32>) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Seats players according to the configured mode.
    #[instrument(skip(input, event_tx))]
    pub fn from_config<R>(
        config: &AppConfig,
        input: SharedInput<R>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Result<Self>
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let game = GameEngine::new(config.game_config()?);
        let delay = Duration::from_millis(*config.agent_delay_ms());
        let seed = (*config.seed()).unwrap_or_else(|| GameRng::from_entropy().seed());
        info!(mode = %config.mode(), seed, "Seating players");

        let agent = |mark: Mark, seed: u64| -> Box<dyn Player> {
            Box::new(AgentPlayer::new(
                format!("Agent {mark}"),
                mark,
                GameRng::new(seed),
                delay,
            ))
        };
        let human = |mark: Mark| -> Box<dyn Player> {
            Box::new(
                HumanPlayer::new(format!("Player {mark}"), input.clone())
                    .with_events(event_tx.clone()),
            )
        };

        let (player_x, player_o) = match config.mode() {
            Mode::HumanVsHuman => (human(Mark::X), human(Mark::O)),
            Mode::HumanVsAgent => match config.agent_mark() {
                Mark::X => (agent(Mark::X, seed), human(Mark::O)),
                Mark::O => (human(Mark::X), agent(Mark::O, seed)),
            },
            Mode::AgentVsAgent => (agent(Mark::X, seed), agent(Mark::O, seed.wrapping_add(1))),
        };

        Ok(Self::new(game, player_x, player_o, event_tx).with_max_turns(*config.max_turns()))
    }

    /// The game being played.
    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    /// Runs the game loop until someone wins, a player quits, or the turn
    /// limit is reached. Returns the winner.
    pub async fn run(&mut self) -> Result<Option<Mark>> {
        info!("Starting game orchestration");
        self.publish_state()?;

        loop {
            if let Some(winner) = self.game.winner() {
                self.send(GameEvent::Message(format!("Player {winner} wins!")))?;
                self.finish(Some(winner))?;
                return Ok(Some(winner));
            }
            if self.max_turns.is_some_and(|max| self.turns >= max) {
                self.send(GameEvent::Message(format!(
                    "Turn limit of {} reached, no winner.",
                    self.turns
                )))?;
                self.finish(None)?;
                return Ok(None);
            }

            let mark = self.game.current_mark();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            if player.is_agent() {
                self.event_tx.send(GameEvent::AgentThinking(mark))?;
            }

            debug!(player = %player.name(), "Waiting for command");
            let command = player.next_command(&self.game).await?;

            if let Step::Stop = self.execute(mark, command)? {
                self.finish(None)?;
                return Ok(None);
            }
        }
    }

    /// Applies one command and reports the result to the UI.
    #[instrument(skip(self))]
    fn execute(&mut self, mark: Mark, command: Command) -> Result<Step> {
        let applied = match command {
            Command::Quit => {
                info!(%mark, "Player quit");
                self.send(GameEvent::Message(format!("Player {mark} left the game.")))?;
                return Ok(Step::Stop);
            }
            Command::Reset => {
                info!(%mark, "Game reset");
                self.game = GameEngine::new(*self.game.config());
                self.turns = 0;
                self.started = None;
                self.send(GameEvent::Message("New game started.".to_string()))?;
                self.publish_state()?;
                return Ok(Step::Continue);
            }
            Command::Help => {
                self.send(GameEvent::Message(HELP.to_string()))?;
                return Ok(Step::Continue);
            }
            Command::Play(Decision::Pass) => {
                self.send(GameEvent::Message(format!(
                    "Player {mark} has no legal action."
                )))?;
                return Ok(Step::Stop);
            }
            Command::Play(decision @ (Decision::Move { .. } | Decision::Shift(_)))
                if !self.game.movement_unlocked() =>
            {
                debug!(%decision, "Movement before all pieces are placed");
                false
            }
            Command::Play(decision) => {
                let applied = self.game.apply(decision);
                if applied {
                    self.send(GameEvent::ActionTaken { mark, decision })?;
                }
                applied
            }
            Command::Select(at) => {
                if self.game.movement_unlocked()
                    && self.game.is_within_grid(at)
                    && self.game.select_piece(at.x, at.y)
                {
                    self.started.get_or_insert_with(Instant::now);
                    self.send(GameEvent::Message(
                        "Now pick an empty spot to move the piece.".to_string(),
                    ))?;
                    return Ok(Step::Continue);
                }
                false
            }
            Command::MoveTo(to) => {
                let from = self.game.selected();
                let moved = self.game.move_piece(to.x, to.y);
                if let (true, Some(from)) = (moved, from) {
                    self.send(GameEvent::ActionTaken {
                        mark,
                        decision: Decision::Move { from, to },
                    })?;
                }
                moved
            }
        };

        if !applied {
            self.send(GameEvent::Message(invalid_message(&self.game)))?;
            return Ok(Step::Continue);
        }
        self.started.get_or_insert_with(Instant::now);
        self.turns += 1;
        self.publish_state()?;
        Ok(Step::Continue)
    }

    fn publish_state(&self) -> Result<()> {
        self.send(GameEvent::StateChanged(
            self.game.board().render(&self.game.grid()),
        ))?;
        if self.game.winner().is_none() {
            self.send(GameEvent::Message(status_message(&self.game)))?;
        }
        Ok(())
    }

    fn finish(&self, winner: Option<Mark>) -> Result<()> {
        let elapsed = self
            .started
            .map(|started| started.elapsed())
            .unwrap_or_default();
        info!(?winner, turns = self.turns, ?elapsed, "Game over");
        self.send(GameEvent::GameOver {
            winner,
            turns: self.turns,
            elapsed,
        })
    }

    fn send(&self, event: GameEvent) -> Result<()> {
        self.event_tx.send(event)?;
        Ok(())
    }
}

/// Prompt for the player to move.
pub fn status_message(game: &GameEngine) -> String {
    let mark = game.current_mark();
    match game.phase() {
        Phase::Finished(winner) => format!("Player {winner} wins!"),
        Phase::Moving => format!("Player {mark}, you can move a piece or move the grid."),
        Phase::Placing => format!("Player {mark}, place a piece inside the grid."),
    }
}

fn invalid_message(game: &GameEngine) -> String {
    match game.phase() {
        Phase::Moving if game.selected().is_some() => {
            "Invalid move! Pick an empty cell inside the grid.".to_string()
        }
        Phase::Moving => {
            "Invalid move! Select one of your pieces inside the grid, or shift the grid."
                .to_string()
        }
        _ => "Invalid move! Pick an empty cell inside the grid.".to_string(),
    }
}
