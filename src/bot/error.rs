use crate::game::{GameError, Position};

/// Misuse of a computer strategy. Unlike a rejected move these are never
/// expected during a well-formed session and should not be retried.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum StrategyError {
    #[error("no empty cells left on the board")]
    NoEmptyCells,
    #[error("can't choose a move for a finished game")]
    GameIsFinished,
    #[error("unrecognized strategy: {name}")]
    UnknownStrategy { name: String },
    #[error("chosen position {position} was rejected: {source}")]
    MoveRejected {
        position: Position,
        #[source]
        source: GameError,
    },
}

impl StrategyError {
    pub fn unknown_strategy(name: impl Into<String>) -> Self {
        Self::UnknownStrategy { name: name.into() }
    }

    pub fn move_rejected(position: Position, source: GameError) -> Self {
        Self::MoveRejected { position, source }
    }
}
