//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::frequency::{english_order, letter_counts};
use crate::core::{Game, Letter, SecretWord};

/// A strategy for picking the next letter to guess
pub trait Strategy {
    /// Select a letter not yet guessed in `game`
    ///
    /// `candidates` are the dictionary words still consistent with the game.
    /// Returns `None` only when every letter has already been guessed.
    fn select_letter(&self, game: &Game, candidates: &[&SecretWord]) -> Option<Letter>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most common letter among candidates (default)
    Frequency(FrequencyStrategy),
    /// Uniformly random unguessed letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, game: &Game, candidates: &[&SecretWord]) -> Option<Letter> {
        match self {
            Self::Frequency(s) => s.select_letter(game, candidates),
            Self::Random(s) => s.select_letter(game, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }
}

/// Guess the letter that appears in the most remaining candidates
///
/// Ties go to the alphabetically first letter. Without any candidate
/// (the secret is not in the dictionary) it falls back to English letter
/// frequency.
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, game: &Game, candidates: &[&SecretWord]) -> Option<Letter> {
        let counts = letter_counts(candidates);

        let best = Letter::all()
            .filter(|&letter| !game.has_guessed(letter) && counts[letter.index()] > 0)
            .max_by(|a, b| counts[a.index()].cmp(&counts[b.index()]).then(b.cmp(a)));

        best.or_else(|| english_order().find(|&letter| !game.has_guessed(letter)))
    }
}

/// Random strategy
///
/// Picks any unguessed letter. Useful as a baseline for benchmarks.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(&self, game: &Game, _candidates: &[&SecretWord]) -> Option<Letter> {
        use rand::prelude::IndexedRandom;

        let unguessed: Vec<Letter> = Letter::all()
            .filter(|&letter| !game.has_guessed(letter))
            .collect();

        unguessed.choose(&mut rand::rng()).copied()
    }
}
