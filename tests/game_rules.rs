//! End-to-end rules of a single round, driven through the public API.

use hangman::core::{Game, GameError, GameStatus, InputError, MAX_WRONG_GUESSES};

fn play(word: &str, guesses: &[&str]) -> Game {
    let mut game = Game::new(word).unwrap();
    for guess in guesses {
        game.guess(guess).unwrap();
    }
    game
}

#[test]
fn absent_word_is_rejected() {
    let err = Game::try_from(None::<&str>).unwrap_err();
    assert_eq!(err, GameError::InvalidArgument(InputError::MissingWord));

    let err = Game::new("").unwrap_err();
    assert_eq!(err, GameError::InvalidArgument(InputError::MissingWord));
}

#[test]
fn present_word_starts_fresh() {
    let game = Game::try_from(Some("Glorp")).unwrap();
    assert_eq!(game.masked_word(), "-----");
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.guess_count(), 0);
    assert_eq!(game.remaining_wrong_guesses(), MAX_WRONG_GUESSES);
}

#[test]
fn guesses_ignore_case() {
    let mut game = Game::new("Glorp").unwrap();
    assert!(game.guess("G").unwrap());
    assert_eq!(game.masked_word(), "g----");

    // Same letter in the other case is a repeat
    assert!(!game.guess("g").unwrap());
    assert_eq!(game.guess_count(), 1);
}

#[test]
fn repeated_guess_changes_nothing() {
    let mut game = Game::new("cat").unwrap();
    game.guess("z").unwrap();
    let before = (game.masked_word(), game.wrong_guess_count(), game.guess_count());

    assert!(!game.guess("z").unwrap());
    assert!(!game.guess("Z").unwrap());
    assert_eq!(
        (game.masked_word(), game.wrong_guess_count(), game.guess_count()),
        before
    );
}

#[test]
fn malformed_guesses_leave_state_unchanged() {
    let mut game = Game::new("cat").unwrap();
    game.guess("c").unwrap();

    for (input, expected) in [
        ("1", InputError::NotAlphabetic('1')),
        ("", InputError::EmptyGuess),
        ("ab", InputError::NotSingleLetter(2)),
        ("é", InputError::NotAlphabetic('é')),
    ] {
        let err = game.guess(input).unwrap_err();
        assert_eq!(err, GameError::InvalidArgument(expected), "input {input:?}");
    }

    assert_eq!(game.masked_word(), "c--");
    assert_eq!(game.guess_count(), 1);
    assert_eq!(game.wrong_guess_count(), 0);
}

#[test]
fn revealing_every_letter_wins() {
    let game = play("cat", &["c", "a", "t"]);
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.masked_word(), "cat");
}

#[test]
fn seventh_miss_loses() {
    let mut game = play("cat", &["b", "d", "e", "f", "g", "h"]);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.remaining_wrong_guesses(), 1);

    game.guess("i").unwrap();
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.wrong_guess_count(), MAX_WRONG_GUESSES);
    assert_eq!(game.remaining_wrong_guesses(), 0);
}

#[test]
fn win_with_misses_still_wins() {
    let game = play("cat", &["z", "q", "c", "x", "a", "t"]);
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.wrong_guess_count(), 3);
}

#[test]
fn masking_reveals_every_occurrence() {
    let mut game = play("mississippi", &["i", "s"]);
    assert_eq!(game.masked_word(), "-ississi--i");

    game.guess("p").unwrap();
    assert_eq!(game.masked_word(), "-ississippi");

    game.guess("m").unwrap();
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn finished_round_rejects_guesses() {
    let mut won = play("cat", &["c", "a", "t"]);
    assert_eq!(won.guess("z"), Err(GameError::GameOver(GameStatus::Won)));
    assert_eq!(won.guess_count(), 3);

    let mut lost = play("cat", &["b", "d", "e", "f", "g", "h", "i"]);
    assert_eq!(lost.guess("c"), Err(GameError::GameOver(GameStatus::Lost)));
    assert_eq!(lost.masked_word(), "---");
    assert_eq!(lost.status(), GameStatus::Lost);
}

#[test]
fn finished_round_still_validates_input_first() {
    let mut game = play("a", &["a"]);
    assert_eq!(
        game.guess("ab"),
        Err(GameError::InvalidArgument(InputError::NotSingleLetter(2)))
    );
}

#[test]
fn guess_lists_are_sorted_and_disjoint() {
    let game = play("cat", &["t", "z", "c", "b"]);
    let correct: Vec<char> = game.correct_guesses().map(|l| l.as_char()).collect();
    let wrong: Vec<char> = game.wrong_guesses().map(|l| l.as_char()).collect();

    assert_eq!(correct, vec!['c', 't']);
    assert_eq!(wrong, vec!['b', 'z']);
}
