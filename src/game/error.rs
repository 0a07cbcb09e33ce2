use super::Position;

/// Reason a move was rejected. Rejections are recoverable: the caller is
/// expected to ask for another position.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("invalid position (expected: 1-9, found: {position})")]
    InvalidPosition { position: Position },
    #[error("cell {position} is occupied")]
    CellIsOccupied { position: Position },
    #[error("can't make turn on a finished game")]
    GameIsFinished,
}

impl GameError {
    pub fn invalid_position(position: Position) -> Self {
        Self::InvalidPosition { position }
    }

    pub fn cell_is_occupied(position: Position) -> Self {
        Self::CellIsOccupied { position }
    }
}
