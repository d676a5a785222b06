//! Driver configuration: game mode, agent settings, board size.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tic_tac_two_engine::{DEFAULT_BOARD_SIZE, GameConfig, Mark};
use tracing::{debug, info, instrument};

/// Config file read when no path is given, if present.
pub const DEFAULT_CONFIG_PATH: &str = "tic_tac_two.toml";

/// Who sits at each side of the board.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
pub enum Mode {
    /// Two humans share the console.
    #[default]
    #[serde(rename = "hvh")]
    #[value(name = "hvh")]
    #[strum(to_string = "Human vs Human")]
    HumanVsHuman,
    /// A human plays the heuristic agent.
    #[serde(rename = "hva")]
    #[value(name = "hva")]
    #[strum(to_string = "Human vs AI")]
    HumanVsAgent,
    /// Two agents play each other.
    #[serde(rename = "ava")]
    #[value(name = "ava")]
    #[strum(to_string = "AI vs AI")]
    AgentVsAgent,
}

/// Settings for one console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seating.
    mode: Mode,

    /// Mark the agent plays in human-vs-agent mode.
    agent_mark: Mark,

    /// Seed for agent randomness; drawn from the OS when absent.
    seed: Option<u64>,

    /// Pause before each agent turn, in milliseconds.
    agent_delay_ms: u64,

    /// Board side length.
    board_size: usize,

    /// Stop after this many turns without a winner.
    max_turns: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            agent_mark: Mark::O,
            seed: None,
            agent_delay_ms: 500,
            board_size: DEFAULT_BOARD_SIZE,
            max_turns: None,
        }
    }
}

/// Values given on the command line; each replaces the file's value when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Seating.
    pub mode: Option<Mode>,
    /// Agent mark.
    pub agent_mark: Option<Mark>,
    /// Agent seed.
    pub seed: Option<u64>,
    /// Agent delay in milliseconds.
    pub agent_delay_ms: Option<u64>,
    /// Board side length.
    pub board_size: Option<usize>,
    /// Turn cap.
    pub max_turns: Option<u32>,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.game_config()?;
        info!(mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_PATH`] if it exists, else defaults.
    #[instrument]
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(mark) = overrides.agent_mark {
            self.agent_mark = mark;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(delay) = overrides.agent_delay_ms {
            self.agent_delay_ms = delay;
        }
        if let Some(size) = overrides.board_size {
            self.board_size = size;
        }
        if let Some(turns) = overrides.max_turns {
            self.max_turns = Some(turns);
        }
        self
    }

    /// Engine dimensions for this configuration.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(self.board_size).map_err(|e| ConfigError::new(e.to_string()))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(*config.mode(), Mode::HumanVsHuman);
        assert_eq!(*config.agent_mark(), Mark::O);
        assert_eq!(*config.agent_delay_ms(), 500);
        assert_eq!(*config.board_size(), 5);
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = AppConfig::default().with_overrides(Overrides {
            mode: Some(Mode::AgentVsAgent),
            seed: Some(9),
            ..Overrides::default()
        });
        assert_eq!(*config.mode(), Mode::AgentVsAgent);
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(*config.agent_delay_ms(), 500);
    }

    #[test]
    fn test_board_too_small_is_config_error() {
        let config = AppConfig::default().with_overrides(Overrides {
            board_size: Some(2),
            ..Overrides::default()
        });
        let err = config.game_config().unwrap_err();
        assert!(err.message.contains("smaller"));
    }

    #[test]
    fn test_huge_board_is_config_error() {
        let config = AppConfig::default().with_overrides(Overrides {
            board_size: Some(usize::MAX),
            ..Overrides::default()
        });
        let err = config.game_config().unwrap_err();
        assert!(err.message.contains("larger than the maximum"));
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::HumanVsAgent.to_string(), "Human vs AI");
    }
}
