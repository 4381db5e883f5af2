//! Word solving command
//!
//! Lets the solver play against a specific target word and records each step.

use crate::core::{Game, GameError, GameStatus, Letter};
use crate::solver::{Solver, Strategy};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self { target }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub status: GameStatus,
    pub wrong_guesses: usize,
    pub steps: Vec<GuessStep>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub letter: Letter,
    pub correct: bool,
    pub masked: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word using the given solver and strategy
///
/// # Errors
///
/// Returns an error if the target is not a valid secret word.
pub fn solve_word<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, GameError> {
    let mut game = Game::new(&config.target)?;
    let mut steps = Vec::new();

    while let Some(letter) = solver.next_guess(&game) {
        let candidates_before = solver.count_candidates(&game);

        // A strategy repeating itself would loop forever
        if !game.guess_letter(letter)? {
            break;
        }

        steps.push(GuessStep {
            letter,
            correct: game.secret_word().contains(letter),
            masked: game.masked_word(),
            candidates_before,
            candidates_after: solver.count_candidates(&game),
        });
    }

    Ok(SolveResult {
        target: game.secret_word().text().to_string(),
        status: game.status(),
        wrong_guesses: game.wrong_guess_count(),
        steps,
    })
}
