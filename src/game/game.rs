use tracing::debug;

use crate::game::board::{Board, BoardState, Position};
use crate::game::error::GameError;
use crate::game::{GameResult, GameState, Mark};

/// Rows, columns and diagonals, as 1-based positions.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

/// A single round of tic-tac-toe: the board, whose turn it is and the result.
///
/// `Clone` yields a fully independent game, which is what the computer
/// strategies rely on to explore hypothetical moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Mark,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            board: Board::default(),
            current_player: Mark::X,
            state: GameState::InGame,
        }
    }
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the current player's mark at `position`.
    ///
    /// Returns `false` if the position is invalid or occupied, or the game is
    /// already over. Nothing changes in that case.
    pub fn make_move(&mut self, position: Position) -> bool {
        match self.try_move(position) {
            Ok(_) => true,
            Err(err) => {
                debug!(position, %err, "move rejected");
                false
            }
        }
    }

    /// Same as [`Game::make_move`], but reports why a move was rejected.
    pub fn try_move(&mut self, position: Position) -> GameResult<GameState> {
        if self.is_finished() {
            return Err(GameError::GameIsFinished);
        }
        self.board.try_place_mark(position, self.current_player)?;
        Ok(self.update_state())
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn winner(&self) -> Option<Mark> {
        self.state.winner()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn current_board(&self) -> BoardState {
        self.board.state()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        self.board.empty_positions()
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Mark::X;
        self.state = GameState::InGame;
    }

    fn has_won(&self, mark: Mark) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&pos| self.board.mark(pos) == Some(mark)))
    }

    // a win on the last free cell is a win, not a draw
    fn update_state(&mut self) -> GameState {
        let mark = self.current_player;
        if self.has_won(mark) {
            self.state = GameState::won_by(mark);
        } else if self.board.is_full() {
            self.state = GameState::Draw;
        } else {
            self.current_player = mark.opponent();
        }
        self.state
    }
}
