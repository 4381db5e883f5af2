//! Error types for game construction and guessing

use super::GameStatus;
use thiserror::Error;

/// Why a word or letter was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no secret word was supplied")]
    MissingWord,
    #[error("secret word contains non-letter character {0:?}")]
    WordNotAlphabetic(char),
    #[error("no letter was supplied")]
    EmptyGuess,
    #[error("expected exactly one letter, got {0} characters")]
    NotSingleLetter(usize),
    #[error("{0:?} is not a letter")]
    NotAlphabetic(char),
}

/// Errors returned by [`Game`](super::Game) operations
///
/// Repeating a letter is not an error; see [`Game::guess`](super::Game::guess).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The caller passed a word or letter that breaks the input contract
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InputError),
    /// The round already ended; the guess was not recorded
    #[error("game is already over ({0})")]
    GameOver(GameStatus),
}
