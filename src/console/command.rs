//! Console commands typed by human players.

use derive_more::Display;
use tic_tac_two_engine::{Coord, Decision, Direction};

/// Help text listing console commands.
pub const HELP: &str = "\
Commands:
  place X Y    place a piece at column X, row Y (p)
  select X Y   pick up one of your pieces (sel)
  move X Y     move the selected piece to column X, row Y (m)
  shift DIR    slide the grid: n ne e se s sw w nw (g)
  reset        start a new game (new)
  help         show this help (h, ?)
  quit         leave the game (q)";

/// One request from a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A complete turn action.
    Play(Decision),
    /// First half of a move: choose the piece.
    Select(Coord),
    /// Second half of a move: choose the target.
    MoveTo(Coord),
    /// Start over with a fresh game.
    Reset,
    /// Show the command list.
    Help,
    /// Abandon the game.
    Quit,
}

/// Why a console line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseCommandError {
    /// Blank line.
    #[display("Enter a command, or 'help'")]
    Empty,
    /// Unknown verb.
    #[display("Unknown command '{}'", _0)]
    UnknownCommand(String),
    /// Missing or malformed coordinates.
    #[display("'{}' needs a column and a row, e.g. '{} 2 3'", _0, _0)]
    BadCoordinates(String),
    /// Missing or unknown direction.
    #[display("Unknown direction; use n ne e se s sw w nw")]
    BadDirection,
}

impl std::error::Error for ParseCommandError {}

impl std::str::FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words
            .next()
            .ok_or(ParseCommandError::Empty)?
            .to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        let coord = |name: &str| -> Result<Coord, ParseCommandError> {
            match args.as_slice() {
                [x, y] => match (x.parse(), y.parse()) {
                    (Ok(x), Ok(y)) => Ok(Coord::new(x, y)),
                    _ => Err(ParseCommandError::BadCoordinates(name.to_string())),
                },
                _ => Err(ParseCommandError::BadCoordinates(name.to_string())),
            }
        };

        match verb.as_str() {
            "place" | "p" => Ok(Command::Play(Decision::Place { to: coord("place")? })),
            "select" | "sel" => Ok(Command::Select(coord("select")?)),
            "move" | "m" => Ok(Command::MoveTo(coord("move")?)),
            "shift" | "grid" | "g" => match args.as_slice() {
                [dir] => Direction::parse(dir)
                    .map(|d| Command::Play(Decision::Shift(d)))
                    .ok_or(ParseCommandError::BadDirection),
                _ => Err(ParseCommandError::BadDirection),
            },
            "reset" | "new" => Ok(Command::Reset),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(ParseCommandError::UnknownCommand(other.to_string())),
        }
    }
}
