pub mod error;
pub mod minimax;
pub mod random;
pub mod strategy;

pub use error::StrategyError;
pub use strategy::MoveStrategy;

use crate::game::{Game, Position};

pub type StrategyResult<T> = Result<T, StrategyError>;

/// Empty positions a strategy may pick from, in ascending order.
fn candidate_positions(game: &Game) -> StrategyResult<Vec<Position>> {
    let positions = game.empty_positions();
    if positions.is_empty() {
        return Err(StrategyError::NoEmptyCells);
    }
    if game.is_finished() {
        return Err(StrategyError::GameIsFinished);
    }
    Ok(positions)
}

fn apply(game: &mut Game, position: Position) -> StrategyResult<Position> {
    game.try_move(position)
        .map_err(|err| StrategyError::move_rejected(position, err))?;
    Ok(position)
}
