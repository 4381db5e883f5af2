//! Automatic hangman player
//!
//! This module contains letter-selection strategies and the solver that
//! narrows a dictionary down to the words still consistent with a game.

mod engine;
pub mod frequency;
pub mod strategy;

pub use engine::Solver;
pub use frequency::{ENGLISH_FREQUENCY_ORDER, letter_counts};
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
