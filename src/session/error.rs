use crate::bot::StrategyError;

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("computer player failed: {0}")]
    Strategy(#[from] StrategyError),
}
