//! Command-line interface for tic_tac_two.

use tic_tac_two::{Mode, Overrides};
use clap::{Args, Parser, Subcommand};
use tic_tac_two_engine::Mark;

/// Tic Tac Two - tic-tac-toe with a movable grid
#[derive(Parser, Debug)]
#[command(name = "tic_tac_two")]
#[command(about = "Tic-tac-toe with a movable 3x3 grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play(PlayArgs),

    /// Print the rules
    Rules,
}

/// Options for a game; each overrides the config file.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Who plays: hvh, hva, or ava
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Mark the agent plays in hva mode (x or o)
    #[arg(long, value_parser = parse_mark)]
    pub agent_mark: Option<Mark>,

    /// Seed for agent randomness
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before each agent turn, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Board side length
    #[arg(long)]
    pub board_size: Option<usize>,

    /// Stop after this many turns
    #[arg(long)]
    pub max_turns: Option<u32>,
}

impl PlayArgs {
    /// Values to apply over the loaded config.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            mode: self.mode,
            agent_mark: self.agent_mark,
            seed: self.seed,
            agent_delay_ms: self.delay_ms,
            board_size: self.board_size,
            max_turns: self.max_turns,
        }
    }
}

fn parse_mark(s: &str) -> Result<Mark, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "x" => Ok(Mark::X),
        "o" => Ok(Mark::O),
        other => Err(format!("unknown mark '{other}', expected x or o")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_overrides() {
        let cli = Cli::try_parse_from([
            "tic_tac_two",
            "play",
            "--mode",
            "hva",
            "--agent-mark",
            "x",
            "--seed",
            "3",
            "--delay-ms",
            "0",
        ])
        .unwrap();
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.mode, Some(Mode::HumanVsAgent));
        assert_eq!(overrides.agent_mark, Some(Mark::X));
        assert_eq!(overrides.seed, Some(3));
        assert_eq!(overrides.agent_delay_ms, Some(0));
        assert_eq!(overrides.board_size, None);
    }

    #[test]
    fn test_rejects_unknown_mark() {
        let result = Cli::try_parse_from(["tic_tac_two", "play", "--agent-mark", "z"]);
        assert!(result.is_err());
    }
}
