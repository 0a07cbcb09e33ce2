//! Exhaustive minimax search.
//!
//! Every candidate move is played out on a cloned [`Game`] down to the end of
//! the round. Scores are relative to the player to move at the root (the
//! maximizer): `10 - depth` for its wins, `depth - 10` for its losses and `0`
//! for draws, so quicker wins and slower losses are preferred.

use tracing::{debug, trace};

use crate::bot::{apply, candidate_positions, StrategyResult};
use crate::game::{Game, GameState, Mark, Position, BOARD_SIZE};

const WIN_SCORE: i32 = 10;

/// Opening played on an empty board without searching.
pub const OPENING_POSITION: Position = 5;

/// Returns the best position for the current player.
///
/// Among equally scored moves the highest position wins.
pub fn choose_position(game: &Game) -> StrategyResult<Position> {
    let candidates = candidate_positions(game)?;
    if candidates.len() == BOARD_SIZE {
        return Ok(OPENING_POSITION);
    }

    let mut search = Search::new(game.current_player());
    let mut best_score = i32::MIN;
    let mut best_position = candidates[0];
    for position in candidates {
        let score = search.minimax(&simulate(game, position), 0, false);
        trace!(position, score, "candidate scored");
        if score >= best_score {
            best_score = score;
            best_position = position;
        }
    }
    debug!(
        position = best_position,
        score = best_score,
        nodes = search.nodes,
        "minimax search finished"
    );
    Ok(best_position)
}

/// Plays the best move for the current player and returns its position.
pub fn make_move(game: &mut Game) -> StrategyResult<Position> {
    let position = choose_position(game)?;
    apply(game, position)
}

fn simulate(game: &Game, position: Position) -> Game {
    let mut next = game.clone();
    next.make_move(position);
    next
}

struct Search {
    maximizer: Mark,
    nodes: u64,
}

impl Search {
    fn new(maximizer: Mark) -> Self {
        Self {
            maximizer,
            nodes: 0,
        }
    }

    fn score(&self, state: GameState, depth: i32) -> Option<i32> {
        match state {
            GameState::InGame => None,
            GameState::Draw => Some(0),
            won if won.winner() == Some(self.maximizer) => Some(WIN_SCORE - depth),
            _ => Some(depth - WIN_SCORE),
        }
    }

    fn minimax(&mut self, game: &Game, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;
        if let Some(score) = self.score(game.state(), depth) {
            return score;
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for position in game.empty_positions() {
            let score = self.minimax(&simulate(game, position), depth + 1, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}
