use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rand::Rng;

use crate::bot::{minimax, random, StrategyError, StrategyResult};
use crate::game::{Game, Position};

/// How a computer player picks its moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveStrategy {
    Random,
    Optimal,
}

impl MoveStrategy {
    pub fn choose_position<R: Rng + ?Sized>(
        &self,
        game: &Game,
        rng: &mut R,
    ) -> StrategyResult<Position> {
        match self {
            MoveStrategy::Random => random::choose_position(game, rng),
            MoveStrategy::Optimal => minimax::choose_position(game),
        }
    }

    pub fn make_move<R: Rng + ?Sized>(
        &self,
        game: &mut Game,
        rng: &mut R,
    ) -> StrategyResult<Position> {
        match self {
            MoveStrategy::Random => random::make_move(game, rng),
            MoveStrategy::Optimal => minimax::make_move(game),
        }
    }
}

impl FromStr for MoveStrategy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "optimal" | "minimax" => Ok(Self::Optimal),
            _ => Err(StrategyError::unknown_strategy(s)),
        }
    }
}

impl Display for MoveStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveStrategy::Random => f.write_str("random"),
            MoveStrategy::Optimal => f.write_str("optimal"),
        }
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("random".parse::<MoveStrategy>(), Ok(MoveStrategy::Random));
        assert_eq!(" Optimal ".parse::<MoveStrategy>(), Ok(MoveStrategy::Optimal));
        assert_eq!("minimax".parse::<MoveStrategy>(), Ok(MoveStrategy::Optimal));
        assert_eq!(
            "hard".parse::<MoveStrategy>(),
            Err(StrategyError::unknown_strategy("hard"))
        );
        for strategy in [MoveStrategy::Random, MoveStrategy::Optimal] {
            assert_eq!(strategy.to_string().parse::<MoveStrategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_dispatch() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut game = Game::new();
        assert_eq!(MoveStrategy::Optimal.make_move(&mut game, &mut rng), Ok(5));
        let position = MoveStrategy::Random.make_move(&mut game, &mut rng).unwrap();
        assert_ne!(position, 5);
        assert_eq!(game.empty_positions().len(), 7);
    }
}
