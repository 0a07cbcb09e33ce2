//! Text console front end: player setup, the turn loop and the replay menu.

pub mod error;

use std::io::{BufRead, Write};

use rand::Rng;
use tracing::{info, warn};

use crate::bot::MoveStrategy;
use crate::game::{Game, GameState, Mark, Position};

pub use error::SessionError;

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayerKind {
    Human,
    Random,
    Optimal,
}

impl PlayerKind {
    fn strategy(self) -> Option<MoveStrategy> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Random => Some(MoveStrategy::Random),
            PlayerKind::Optimal => Some(MoveStrategy::Optimal),
        }
    }
}

/// Configuration of one side of the board.
#[derive(Clone, Debug)]
pub struct Seat {
    kind: PlayerKind,
    name: Option<String>,
}

impl Seat {
    pub fn new(kind: PlayerKind, name: Option<String>) -> Self {
        Self { kind, name }
    }

    pub fn human() -> Self {
        Self::new(PlayerKind::Human, None)
    }

    pub fn computer(strategy: MoveStrategy) -> Self {
        let kind = match strategy {
            MoveStrategy::Random => PlayerKind::Random,
            MoveStrategy::Optimal => PlayerKind::Optimal,
        };
        Self::new(kind, None)
    }
}

#[derive(Debug)]
struct Player {
    name: String,
    strategy: Option<MoveStrategy>,
}

/// Drives a [`Game`] over a line-based text stream.
pub struct Session<I, O, R> {
    input: I,
    output: O,
    rng: R,
    game: Game,
    seats: [Seat; 2],
}

impl<I: BufRead, O: Write, R: Rng> Session<I, O, R> {
    pub fn new(input: I, output: O, rng: R, x: Seat, o: Seat) -> Self {
        Self {
            input,
            output,
            rng,
            game: Game::new(),
            seats: [x, o],
        }
    }

    /// Plays rounds until the players quit or the input ends.
    /// Returns the result of every completed round.
    pub fn run(&mut self) -> SessionResult<Vec<GameState>> {
        writeln!(self.output, "Welcome to Tic-Tac-Toe!")?;
        writeln!(self.output)?;
        let players = [self.setup(Mark::X)?, self.setup(Mark::O)?];

        let mut results = Vec::new();
        loop {
            let Some(result) = self.play_round(&players)? else {
                warn!("input closed during a round");
                break;
            };
            info!(%result, round = results.len() + 1, "round finished");
            results.push(result);
            if !self.ask_replay()? {
                break;
            }
        }
        Ok(results)
    }

    fn setup(&mut self, mark: Mark) -> SessionResult<Player> {
        let seat = self.seats[Self::seat_index(mark)].clone();
        let name = match (seat.name, seat.kind) {
            (Some(name), _) => name,
            (None, PlayerKind::Human) => {
                write!(self.output, "Enter name for Player {}: ", mark)?;
                self.output.flush()?;
                // an empty answer is kept as entered; only a closed input falls back
                self.read_line()?
                    .unwrap_or_else(|| format!("Player {}", mark))
            }
            (None, _) => format!("Computer {}", mark),
        };
        Ok(Player {
            name,
            strategy: seat.kind.strategy(),
        })
    }

    fn play_round(&mut self, players: &[Player; 2]) -> SessionResult<Option<GameState>> {
        writeln!(self.output)?;
        writeln!(self.output, "Let's start the game!")?;
        writeln!(self.output)?;
        self.game.reset();
        writeln!(self.output, "{}", self.game.board())?;

        while !self.game.is_finished() {
            let mark = self.game.current_player();
            let player = &players[Self::seat_index(mark)];
            let moved = match player.strategy {
                Some(strategy) => {
                    let position = strategy.make_move(&mut self.game, &mut self.rng)?;
                    writeln!(self.output, "{} ({}) plays {}", player.name, mark, position)?;
                    true
                }
                None => match self.read_position(player, mark)? {
                    Some(position) => self.game.make_move(position),
                    None => return Ok(None),
                },
            };
            if moved {
                writeln!(self.output)?;
                writeln!(self.output, "{}", self.game.board())?;
            } else {
                writeln!(
                    self.output,
                    "Invalid move! Position must be between 1-9 and not already occupied."
                )?;
                writeln!(self.output)?;
            }
        }

        let state = self.game.state();
        writeln!(self.output)?;
        match self.game.winner() {
            Some(mark) => writeln!(
                self.output,
                "Congratulations {}! You won!",
                players[Self::seat_index(mark)].name
            )?,
            None => writeln!(self.output, "It's a draw! Good game!")?,
        }
        Ok(Some(state))
    }

    /// Prompts until a number is entered. `None` once the input is exhausted.
    fn read_position(&mut self, player: &Player, mark: Mark) -> SessionResult<Option<Position>> {
        loop {
            writeln!(self.output, "{} ({}), enter position (1-9): ", player.name, mark)?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<Position>() {
                Ok(position) => return Ok(Some(position)),
                Err(_) => {
                    writeln!(
                        self.output,
                        "Invalid input! Please enter a number between 1 and 9."
                    )?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    fn ask_replay(&mut self) -> SessionResult<bool> {
        writeln!(self.output)?;
        writeln!(self.output, "What would you like to do?")?;
        writeln!(self.output, "1. New game")?;
        writeln!(self.output, "2. Quit")?;
        write!(self.output, "Enter your choice (1 or 2): ")?;
        self.output.flush()?;

        match self.read_line()?.as_deref() {
            Some("1") => Ok(true),
            Some("2") | None => {
                writeln!(self.output)?;
                writeln!(self.output, "Thanks for playing! Goodbye!")?;
                Ok(false)
            }
            Some(_) => {
                writeln!(self.output, "Invalid choice. Exiting game.")?;
                Ok(false)
            }
        }
    }

    fn read_line(&mut self) -> SessionResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn seat_index(mark: Mark) -> usize {
        match mark {
            Mark::X => 0,
            Mark::O => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn run(input: &str, x: Seat, o: Seat) -> (Vec<GameState>, String) {
        let mut output = Vec::new();
        let rng = ChaCha8Rng::seed_from_u64(11);
        let results = Session::new(Cursor::new(input), &mut output, rng, x, o)
            .run()
            .unwrap();
        (results, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_human_round() {
        let input = "Alice\nBob\n1\n4\n2\n5\n3\n2\n";
        let (results, output) = run(input, Seat::human(), Seat::human());
        assert_eq!(results, vec![GameState::XWon]);
        assert!(output.contains("Alice (X), enter position (1-9): "));
        assert!(output.contains("Bob (O), enter position (1-9): "));
        // board, its trailing blank line, then a blank line before the result
        assert!(output.contains("-------------\n\n\nCongratulations Alice! You won!"));
        assert!(output.ends_with("Thanks for playing! Goodbye!\n"));
    }

    #[test]
    fn test_reprompts_bad_input() {
        let input = "Ann\nBen\nabc\n0\n1\n1\n4\n2\n5\n3\n2\n";
        let (results, output) = run(input, Seat::human(), Seat::human());
        assert_eq!(results, vec![GameState::XWon]);
        assert!(output.contains("Invalid input! Please enter a number between 1 and 9."));
        assert_eq!(output.matches("Invalid move!").count(), 2);
        assert!(output.contains("Congratulations Ann! You won!"));
    }

    #[test]
    fn test_replay_and_invalid_choice() {
        let input = "x\no\n1\n4\n2\n5\n3\n1\n1\n2\n3\n4\n6\n5\n7\n9\n8\nmaybe\n";
        let (results, output) = run(input, Seat::human(), Seat::human());
        assert_eq!(results, vec![GameState::XWon, GameState::Draw]);
        assert!(output.contains("It's a draw! Good game!"));
        assert!(output.ends_with("Invalid choice. Exiting game.\n"));
    }

    #[test]
    fn test_input_closed_mid_round() {
        let (results, _) = run("a\nb\n5\n", Seat::human(), Seat::human());
        assert!(results.is_empty());
    }

    #[test]
    fn test_optimal_never_loses_to_random() {
        let input = "1\n".repeat(9) + "2\n";
        let (results, output) = run(
            &input,
            Seat::computer(MoveStrategy::Random),
            Seat::computer(MoveStrategy::Optimal),
        );
        assert_eq!(results.len(), 10);
        assert!(!results.contains(&GameState::XWon));
        assert!(output.contains("Computer O (O) plays "));
        assert!(output.contains("Computer X (X) plays "));
    }

    #[test]
    fn test_empty_name_is_kept() {
        let input = "\n\n1\n4\n2\n5\n3\n2\n";
        let (results, output) = run(input, Seat::human(), Seat::human());
        assert_eq!(results, vec![GameState::XWon]);
        assert!(output.contains("\n (X), enter position (1-9): "));
        assert!(output.contains("Congratulations ! You won!"));
        assert!(!output.contains("Player X (X)"));
    }

    #[test]
    fn test_name_defaults_when_input_closed() {
        let (results, output) = run("", Seat::human(), Seat::human());
        assert!(results.is_empty());
        assert!(output.contains("Player X (X), enter position (1-9): "));
    }
}
