//! Hangman
//!
//! A hangman game engine with pluggable word sources, an automatic solver,
//! and terminal front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Game, GameStatus};
//!
//! let mut game = Game::new("cat").unwrap();
//! for letter in ["c", "a", "t"] {
//!     game.guess(letter).unwrap();
//! }
//!
//! assert_eq!(game.status(), GameStatus::Won);
//! assert_eq!(game.masked_word(), "cat");
//! ```

// Core domain types
pub mod core;

// Secret word sources
pub mod wordsource;

// Automatic player
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Environment and CLI configuration
pub mod config;

// Tracing subscriber setup
pub mod logging;
