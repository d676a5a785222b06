//! Game dimensions.

use crate::error::EngineError;
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// Side length of the active grid.
pub const GRID_SIZE: usize = 3;

/// Pieces each mark may place.
pub const MAX_PIECES: usize = 4;

/// Default board side length.
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Largest board side length accepted.
pub const MAX_BOARD_SIZE: usize = 64;

/// Board and grid dimensions for one game.
///
/// Only the board size is chosen by the caller; grid size and piece limit
/// follow from the rules. Built through [`GameConfig::new`] so the board size
/// is always in `GRID_SIZE..=MAX_BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct GameConfig {
    /// Board side length.
    board_size: usize,
    /// Active grid side length.
    grid_size: usize,
    /// Pieces each mark may place.
    max_pieces: usize,
}

impl GameConfig {
    /// Creates a configuration for a `board_size` × `board_size` board.
    #[instrument]
    pub fn new(board_size: usize) -> Result<Self, EngineError> {
        if board_size < GRID_SIZE {
            return Err(EngineError::BoardTooSmall {
                size: board_size,
                grid: GRID_SIZE,
            });
        }
        if board_size > MAX_BOARD_SIZE {
            return Err(EngineError::BoardTooLarge {
                size: board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            board_size,
            grid_size: GRID_SIZE,
            max_pieces: MAX_PIECES,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            grid_size: GRID_SIZE,
            max_pieces: MAX_PIECES,
        }
    }
}
