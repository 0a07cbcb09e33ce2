pub mod board;
pub mod error;
pub mod game;
pub mod grid;

use std::fmt::{Display, Formatter};

pub use board::{Board, BoardState, Cell, Position, BOARD_SIZE};
pub use error::GameError;
pub use game::{Game, WINNING_LINES};

pub type GameResult<T> = Result<T, GameError>;

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// Status of a round. [`GameState::InGame`] is the only non-terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    InGame,
    XWon,
    OWon,
    Draw,
}

impl GameState {
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::X => GameState::XWon,
            Mark::O => GameState::OWon,
        }
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            GameState::XWon => Some(Mark::X),
            GameState::OWon => Some(Mark::O),
            GameState::InGame | GameState::Draw => None,
        }
    }

    pub fn is_finished(self) -> bool {
        self != GameState::InGame
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::InGame => f.write_str("in game"),
            GameState::XWon => f.write_str("X won"),
            GameState::OWon => f.write_str("O won"),
            GameState::Draw => f.write_str("draw"),
        }
    }
}
