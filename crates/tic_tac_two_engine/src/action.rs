//! Turn actions and game phases.

use crate::types::{Coord, Direction, Mark};
use serde::{Deserialize, Serialize};

/// One turn's action, as chosen by a player or the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Place a new piece.
    Place {
        /// Target cell.
        to: Coord,
    },
    /// Relocate an existing piece.
    Move {
        /// Piece to move.
        from: Coord,
        /// Empty target cell.
        to: Coord,
    },
    /// Slide the active grid one cell.
    Shift(Direction),
    /// No action is available.
    Pass,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Place { to } => write!(f, "place at {to}"),
            Decision::Move { from, to } => write!(f, "move {from} -> {to}"),
            Decision::Shift(direction) => write!(f, "shift grid {direction}"),
            Decision::Pass => write!(f, "pass"),
        }
    }
}

/// Phase of a game, derived from piece counts and the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// At least one mark still has pieces to place.
    Placing,
    /// Both marks have placed every piece.
    Moving,
    /// A mark has won.
    Finished(Mark),
}

impl Phase {
    /// Returns the winner if the game is finished.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Phase::Finished(mark) => Some(*mark),
            Phase::Placing | Phase::Moving => None,
        }
    }

    /// Returns true once a winner is recorded.
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Finished(_))
    }
}
