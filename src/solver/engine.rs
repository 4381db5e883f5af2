//! Main hangman solver interface

use super::strategy::Strategy;
use crate::core::{Game, Letter, PLACEHOLDER, SecretWord};

/// Main hangman solver
///
/// Coordinates the guessing process using a given strategy and dictionary.
/// The solver only looks at what a player could see: the masked word and
/// the letters already guessed.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    words: &'a [SecretWord],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and dictionary
    pub const fn new(strategy: S, words: &'a [SecretWord]) -> Self {
        Self { strategy, words }
    }

    /// Get the next letter to guess
    ///
    /// Returns `None` once the game is over or every letter was guessed.
    pub fn next_guess(&self, game: &Game) -> Option<Letter> {
        if game.status().is_terminal() {
            return None;
        }

        let candidates = self.candidates(game);
        self.strategy.select_letter(game, &candidates)
    }

    /// Dictionary words still consistent with the game
    ///
    /// A word is consistent when it has the same length, matches every
    /// revealed position, and has no guessed letter at a hidden position
    /// (hidden letters are unguessed, and wrong letters appear nowhere).
    pub fn candidates(&self, game: &Game) -> Vec<&'a SecretWord> {
        let masked: Vec<char> = game.masked_word().chars().collect();

        self.words
            .iter()
            .filter(|word| is_consistent(word, &masked, game))
            .collect()
    }

    /// Count of consistent dictionary words
    pub fn count_candidates(&self, game: &Game) -> usize {
        self.candidates(game).len()
    }
}

fn is_consistent(word: &SecretWord, masked: &[char], game: &Game) -> bool {
    word.len() == masked.len()
        && word.chars().zip(masked).all(|(letter, &shown)| {
            if shown == PLACEHOLDER {
                !game.has_guessed(letter)
            } else {
                letter.as_char() == shown
            }
        })
}
