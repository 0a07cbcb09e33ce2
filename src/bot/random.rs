use rand::Rng;
use tracing::debug;

use crate::bot::{apply, candidate_positions, StrategyResult};
use crate::game::{Game, Position};

/// Picks one of the empty positions uniformly at random.
pub fn choose_position<R: Rng + ?Sized>(game: &Game, rng: &mut R) -> StrategyResult<Position> {
    let empty_positions = candidate_positions(game)?;
    let index = rng.gen_range(0..empty_positions.len());
    Ok(empty_positions[index])
}

/// Plays a random move for the current player and returns its position.
pub fn make_move<R: Rng + ?Sized>(game: &mut Game, rng: &mut R) -> StrategyResult<Position> {
    let position = choose_position(game, rng)?;
    debug!(position, player = %game.current_player(), "random move");
    apply(game, position)
}
