//! Tic Tac Two - terminal game
//!
//! Plays tic tac two at the console, human or agent on either side.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use tic_tac_two::{AppConfig, GameEvent, Orchestrator, RULES, shared_input};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => run_game(args).await,
        Command::Rules => {
            println!("{RULES}");
            Ok(())
        }
    }
}

/// Runs one console game.
#[instrument]
async fn run_game(args: PlayArgs) -> Result<()> {
    let config = AppConfig::load(args.config.clone())?.with_overrides(args.overrides());
    info!(?config, "Starting console game");

    let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
    let input = shared_input(tokio::io::stdin());
    let mut orchestrator = Orchestrator::from_config(&config, input, event_tx)?;

    println!("TIC TAC TWO - {}", config.mode());
    println!("Type 'help' for commands.\n");

    let renderer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            render(&event);
        }
    });

    let result = orchestrator.run().await;
    // Closing the channel lets the renderer drain and stop.
    drop(orchestrator);
    renderer.await?;
    result.map(|_| ())
}

/// Prints one event.
fn render(event: &GameEvent) {
    match event {
        GameEvent::StateChanged(board) => println!("\n{board}"),
        GameEvent::Message(message) => println!("{message}"),
        GameEvent::AgentThinking(mark) => println!("Agent {mark} is thinking..."),
        GameEvent::ActionTaken { mark, decision } => println!("{mark}: {decision}"),
        GameEvent::GameOver { turns, elapsed, .. } => {
            println!("Game over after {turns} turns. Time: {}s", elapsed.as_secs());
        }
    }
}
