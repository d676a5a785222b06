//! Human player reading commands from a line-oriented input.

use super::Player;
use crate::console::command::{Command, ParseCommandError};
use crate::console::orchestrator::GameEvent;
use anyhow::{Context, Result};
use std::sync::Arc;
use tic_tac_two_engine::GameEngine;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};
use tokio::sync::{Mutex, mpsc};
use tracing::debug;

/// Input lines shared by the humans at one console.
pub type SharedInput<R> = Arc<Mutex<Lines<BufReader<R>>>>;

/// Wraps a reader for sharing between human players.
pub fn shared_input<R: AsyncRead + Unpin>(reader: R) -> SharedInput<R> {
    Arc::new(Mutex::new(BufReader::new(reader).lines()))
}

/// Human player typing at the console.
pub struct HumanPlayer<R> {
    name: String,
    input: SharedInput<R>,
    events: Option<mpsc::UnboundedSender<GameEvent>>,
}

impl<R> HumanPlayer<R> {
    /// Creates a human player reading from `input`.
    pub fn new(name: impl Into<String>, input: SharedInput<R>) -> Self {
        Self {
            name: name.into(),
            input,
            events: None,
        }
    }

    /// Reports unreadable commands on `events` instead of only logging them.
    pub fn with_events(mut self, events: mpsc::UnboundedSender<GameEvent>) -> Self {
        self.events = Some(events);
        self
    }
}

#[async_trait::async_trait]
impl<R: AsyncRead + Unpin + Send> Player for HumanPlayer<R> {
    async fn next_command(&mut self, _game: &GameEngine) -> Result<Command> {
        let mut lines = self.input.lock().await;
        loop {
            let Some(line) = lines.next_line().await.context("Failed to read input")? else {
                debug!(player = %self.name, "Input closed");
                return Ok(Command::Quit);
            };
            match line.parse::<Command>() {
                Ok(command) => {
                    debug!(player = %self.name, ?command, "Command entered");
                    return Ok(command);
                }
                Err(ParseCommandError::Empty) => continue,
                Err(e) => {
                    debug!(player = %self.name, error = %e, "Unreadable command");
                    if let Some(events) = &self.events {
                        events.send(GameEvent::Message(e.to_string()))?;
                    }
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
