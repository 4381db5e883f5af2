//! Secret word sources
//!
//! A [`WordSource`] supplies the secret word for a new round. The game never
//! talks to the network itself; callers pick a source and hand the word to
//! [`Game`], which keeps the game testable with [`FixedWord`].

mod embedded;
mod http;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use http::HttpWordSource;

use crate::core::{Game, GameError, SecretWord};
use rand::seq::IndexedRandom;
use thiserror::Error;

/// Errors from fetching a secret word
#[derive(Debug, Error)]
pub enum WordSourceError {
    /// The request could not be completed (DNS, connect, timeout, body read)
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The service answered with a non-2xx status
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("word service returned an empty body")]
    EmptyResponse,
    #[error("word list is empty")]
    EmptyList,
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Anything that can hand out a random secret word
pub trait WordSource {
    /// Fetch one candidate secret word
    ///
    /// Every call is a fresh fetch; implementations do not cache or retry.
    ///
    /// # Errors
    /// Returns `WordSourceError` if no word could be produced.
    fn fetch_random_word(&self) -> Result<String, WordSourceError>;
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn fetch_random_word(&self) -> Result<String, WordSourceError> {
        (**self).fetch_random_word()
    }
}

impl<S: WordSource + ?Sized> WordSource for &S {
    fn fetch_random_word(&self) -> Result<String, WordSourceError> {
        (**self).fetch_random_word()
    }
}

/// Always returns the same word
#[derive(Debug, Clone)]
pub struct FixedWord(pub String);

impl FixedWord {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }
}

impl WordSource for FixedWord {
    fn fetch_random_word(&self) -> Result<String, WordSourceError> {
        Ok(self.0.clone())
    }
}

/// Picks a word uniformly at random from an in-memory list
#[derive(Debug, Clone)]
pub struct ListWordSource {
    words: Vec<SecretWord>,
}

impl ListWordSource {
    #[must_use]
    pub const fn new(words: Vec<SecretWord>) -> Self {
        Self { words }
    }

    /// Source backed by the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    #[must_use]
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }
}

impl WordSource for ListWordSource {
    fn fetch_random_word(&self) -> Result<String, WordSourceError> {
        self.words
            .choose(&mut rand::rng())
            .map(|word| word.text().to_string())
            .ok_or(WordSourceError::EmptyList)
    }
}

/// Errors from starting a round through a word source
#[derive(Debug, Error)]
pub enum StartError {
    #[error(transparent)]
    Source(#[from] WordSourceError),
    #[error("word source produced an unusable word: {0}")]
    Game(#[from] GameError),
}

/// Fetch a word and start a round with it
///
/// # Errors
/// Returns `StartError::Source` if the fetch fails and `StartError::Game` if
/// the fetched word is not a valid secret word.
pub fn start_game<S: WordSource + ?Sized>(source: &S) -> Result<Game, StartError> {
    let word = source.fetch_random_word()?;
    let game = Game::new(&word)?;
    tracing::debug!(length = word.len(), "Started new game");
    Ok(game)
}
