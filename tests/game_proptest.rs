//! Property-based tests for the round state machine
//!
//! Arbitrary guess sequences, including junk input, must never break the
//! bookkeeping invariants of a `Game`.

use hangman::core::{Game, GameError, GameStatus, MAX_WRONG_GUESSES};
use proptest::prelude::*;

// Mostly single letters with some multi-character and non-letter noise
fn guess_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => "[a-zA-Z]",
        1 => "[a-z0-9 ]{0,3}",
        1 => any::<char>().prop_map(|c| c.to_string()),
    ]
}

fn secret_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,12}"
}

proptest! {
    #[test]
    fn test_guess_count_grows_by_at_most_one(
        secret in secret_strategy(),
        guesses in prop::collection::vec(guess_strategy(), 0..40),
    ) {
        let mut game = Game::new(&secret).unwrap();

        for guess in &guesses {
            let before = game.guess_count();
            let result = game.guess(guess);
            let after = game.guess_count();

            match result {
                Ok(true) => prop_assert_eq!(after, before + 1),
                Ok(false) | Err(_) => prop_assert_eq!(after, before),
            }
        }
    }

    #[test]
    fn test_guess_sets_stay_disjoint_and_bounded(
        secret in secret_strategy(),
        guesses in prop::collection::vec(guess_strategy(), 0..40),
    ) {
        let mut game = Game::new(&secret).unwrap();
        for guess in &guesses {
            let _ = game.guess(guess);

            prop_assert!(game.wrong_guess_count() <= MAX_WRONG_GUESSES);
            for letter in game.correct_guesses() {
                prop_assert!(game.secret_word().contains(letter));
                prop_assert!(!game.wrong_guesses().any(|w| w == letter));
            }
            for letter in game.wrong_guesses() {
                prop_assert!(!game.secret_word().contains(letter));
            }
        }
    }

    #[test]
    fn test_terminal_status_never_changes(
        secret in secret_strategy(),
        guesses in prop::collection::vec(guess_strategy(), 0..60),
    ) {
        let mut game = Game::new(&secret).unwrap();
        let mut finished: Option<GameStatus> = None;

        for guess in &guesses {
            let result = game.guess(guess);

            if let Some(status) = finished {
                prop_assert_eq!(game.status(), status);
                if let Err(GameError::GameOver(reported)) = result {
                    prop_assert_eq!(reported, status);
                } else {
                    prop_assert!(matches!(result, Err(GameError::InvalidArgument(_))));
                }
            } else if game.status().is_terminal() {
                finished = Some(game.status());
            }
        }
    }

    #[test]
    fn test_masked_word_matches_secret(
        secret in secret_strategy(),
        guesses in prop::collection::vec("[a-z]", 0..26),
    ) {
        let mut game = Game::new(&secret).unwrap();
        for guess in &guesses {
            let _ = game.guess(guess);
        }

        let masked = game.masked_word();
        let text = game.secret_word().text();
        prop_assert_eq!(masked.chars().count(), text.chars().count());
        for (shown, actual) in masked.chars().zip(text.chars()) {
            prop_assert!(shown == '-' || shown == actual);
        }
        prop_assert_eq!(game.status() == GameStatus::Won, !masked.contains('-'));
    }
}
