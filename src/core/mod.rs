//! Core domain types for Hangman
//!
//! This module contains the game state machine and its validated inputs.
//! Everything here is pure, in-memory and free of I/O.

mod error;
mod game;
mod letter;
mod secret;

pub use error::{GameError, InputError};
pub use game::{Game, GameStatus, MAX_WRONG_GUESSES, PLACEHOLDER};
pub use letter::Letter;
pub use secret::SecretWord;
