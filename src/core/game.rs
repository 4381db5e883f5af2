//! The hangman state machine
//!
//! A `Game` is created with a secret word and moves from `InProgress` to
//! either `Won` or `Lost` through calls to [`Game::guess`]. Status is derived
//! from the guess sets on every query, so it can never drift from them.

use super::{GameError, InputError, Letter, SecretWord};
use std::collections::BTreeSet;
use std::fmt;

/// Wrong guesses allowed before the round is lost
pub const MAX_WRONG_GUESSES: usize = 7;

/// Shown in the masked word for letters not yet guessed
pub const PLACEHOLDER: char = '-';

/// Outcome of a round so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// `Won` and `Lost` end the round permanently
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// One round of hangman
///
/// The guess sets are private and only ever grow through [`Game::guess`],
/// which keeps them disjoint and consistent with the secret word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    secret: SecretWord,
    correct: BTreeSet<Letter>,
    wrong: BTreeSet<Letter>,
}

impl Game {
    /// Start a round with the given secret word
    ///
    /// # Errors
    /// Returns `GameError::InvalidArgument` if the word is empty or contains
    /// anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Game, GameStatus};
    ///
    /// let mut game = Game::new("Cat").unwrap();
    /// assert_eq!(game.masked_word(), "---");
    ///
    /// assert!(game.guess("C").unwrap());
    /// assert!(!game.guess("c").unwrap()); // repeat is a no-op
    /// assert_eq!(game.masked_word(), "c--");
    /// assert_eq!(game.status(), GameStatus::InProgress);
    /// ```
    pub fn new(secret: &str) -> Result<Self, GameError> {
        Ok(Self::with_secret(SecretWord::new(secret)?))
    }

    /// Start a round with an already validated word
    #[must_use]
    pub fn with_secret(secret: SecretWord) -> Self {
        Self {
            secret,
            correct: BTreeSet::new(),
            wrong: BTreeSet::new(),
        }
    }

    /// Guess a letter given as text
    ///
    /// Returns `Ok(true)` when the letter was recorded and `Ok(false)` when it
    /// had already been guessed (no state change).
    ///
    /// # Errors
    /// - `GameError::InvalidArgument` if `input` is not exactly one ASCII letter
    /// - `GameError::GameOver` if the round has already been won or lost
    ///
    /// The game is left untouched on every error.
    pub fn guess(&mut self, input: &str) -> Result<bool, GameError> {
        let letter = Letter::parse(input)?;
        self.guess_letter(letter)
    }

    /// Guess a pre-validated letter
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the round has already ended.
    pub fn guess_letter(&mut self, letter: Letter) -> Result<bool, GameError> {
        let status = self.status();
        if status.is_terminal() {
            return Err(GameError::GameOver(status));
        }

        if self.has_guessed(letter) {
            return Ok(false);
        }

        if self.secret.contains(letter) {
            self.correct.insert(letter);
        } else {
            self.wrong.insert(letter);
        }

        Ok(true)
    }

    /// Current status, recomputed from the guess sets
    ///
    /// A fully revealed word wins regardless of the wrong-guess count.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_fully_revealed() {
            GameStatus::Won
        } else if self.wrong.len() >= MAX_WRONG_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// The secret word with unguessed letters replaced by [`PLACEHOLDER`]
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.secret
            .chars()
            .map(|letter| {
                if self.correct.contains(&letter) {
                    letter.as_char()
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }

    #[must_use]
    pub const fn secret_word(&self) -> &SecretWord {
        &self.secret
    }

    /// Correctly guessed letters in alphabetical order
    pub fn correct_guesses(&self) -> impl Iterator<Item = Letter> + '_ {
        self.correct.iter().copied()
    }

    /// Wrongly guessed letters in alphabetical order
    pub fn wrong_guesses(&self) -> impl Iterator<Item = Letter> + '_ {
        self.wrong.iter().copied()
    }

    #[must_use]
    pub fn correct_guess_count(&self) -> usize {
        self.correct.len()
    }

    #[must_use]
    pub fn wrong_guess_count(&self) -> usize {
        self.wrong.len()
    }

    /// Total distinct letters guessed so far
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.correct.len() + self.wrong.len()
    }

    /// Wrong guesses left before the round is lost
    #[must_use]
    pub fn remaining_wrong_guesses(&self) -> usize {
        MAX_WRONG_GUESSES.saturating_sub(self.wrong.len())
    }

    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.correct.contains(&letter) || self.wrong.contains(&letter)
    }

    fn is_fully_revealed(&self) -> bool {
        self.secret.letters().all(|letter| self.correct.contains(&letter))
    }
}

impl TryFrom<Option<&str>> for Game {
    type Error = GameError;

    /// `None` stands for a missing word, e.g. an empty session slot
    fn try_from(secret: Option<&str>) -> Result<Self, Self::Error> {
        let secret = secret.ok_or(InputError::MissingWord)?;
        Self::new(secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Game, letters: &str) {
        for c in letters.chars() {
            game.guess(&c.to_string()).unwrap();
        }
    }

    #[test]
    fn new_game_starts_in_progress() {
        let game = Game::new("cat").unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.guess_count(), 0);
        assert_eq!(game.remaining_wrong_guesses(), MAX_WRONG_GUESSES);
    }

    #[test]
    fn new_rejects_missing_word() {
        assert_eq!(
            Game::new(""),
            Err(GameError::InvalidArgument(InputError::MissingWord))
        );
        assert_eq!(
            Game::try_from(None),
            Err(GameError::InvalidArgument(InputError::MissingWord))
        );
    }

    #[test]
    fn try_from_some_word() {
        let game = Game::try_from(Some("Glorp")).unwrap();
        assert_eq!(game.secret_word().text(), "glorp");
    }

    #[test]
    fn correct_guess_recorded() {
        let mut game = Game::new("cat").unwrap();
        assert_eq!(game.guess("a"), Ok(true));
        assert_eq!(game.correct_guess_count(), 1);
        assert_eq!(game.wrong_guess_count(), 0);
    }

    #[test]
    fn wrong_guess_recorded() {
        let mut game = Game::new("cat").unwrap();
        assert_eq!(game.guess("z"), Ok(true));
        assert_eq!(game.correct_guess_count(), 0);
        assert_eq!(game.wrong_guess_count(), 1);
        assert_eq!(game.remaining_wrong_guesses(), MAX_WRONG_GUESSES - 1);
    }

    #[test]
    fn repeat_guess_is_noop() {
        let mut game = Game::new("cat").unwrap();
        assert_eq!(game.guess("z"), Ok(true));
        assert_eq!(game.guess("z"), Ok(false));
        assert_eq!(game.guess("Z"), Ok(false));
        assert_eq!(game.wrong_guess_count(), 1);
    }

    #[test]
    fn invalid_guess_leaves_state_unchanged() {
        let mut game = Game::new("cat").unwrap();
        game.guess("c").unwrap();
        let before = game.clone();

        assert!(matches!(game.guess("1"), Err(GameError::InvalidArgument(_))));
        assert!(matches!(game.guess(""), Err(GameError::InvalidArgument(_))));
        assert!(matches!(game.guess("ab"), Err(GameError::InvalidArgument(_))));

        assert_eq!(game, before);
    }

    #[test]
    fn win_takes_all_distinct_letters() {
        let mut game = Game::new("mississippi").unwrap();
        play(&mut game, "misp");
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.masked_word(), "mississippi");
    }

    #[test]
    fn loss_on_seventh_wrong_guess() {
        let mut game = Game::new("cat").unwrap();
        play(&mut game, "bdefgh");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.remaining_wrong_guesses(), 1);

        game.guess("i").unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.remaining_wrong_guesses(), 0);
    }

    #[test]
    fn win_with_six_wrong_guesses() {
        let mut game = Game::new("cat").unwrap();
        play(&mut game, "bdefghcat");
        assert_eq!(game.wrong_guess_count(), 6);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn guesses_after_terminal_state_rejected() {
        let mut game = Game::new("cat").unwrap();
        play(&mut game, "cat");
        let finished = game.clone();

        assert_eq!(game.guess("z"), Err(GameError::GameOver(GameStatus::Won)));
        assert_eq!(game.guess("c"), Err(GameError::GameOver(GameStatus::Won)));
        assert_eq!(game, finished);
    }

    #[test]
    fn invalid_input_reported_before_game_over() {
        let mut game = Game::new("a").unwrap();
        game.guess("a").unwrap();
        assert!(matches!(game.guess("7"), Err(GameError::InvalidArgument(_))));
    }

    #[test]
    fn masked_word_hides_unguessed() {
        let mut game = Game::new("mississippi").unwrap();
        assert_eq!(game.masked_word(), "-----------");
        play(&mut game, "is");
        assert_eq!(game.masked_word(), "-ississi--i");
        game.guess("p").unwrap();
        assert_eq!(game.masked_word(), "-ississippi");
    }

    #[test]
    fn masked_word_reveals_every_occurrence() {
        let mut game = Game::new("mississippi").unwrap();
        play(&mut game, "sp");
        assert_eq!(game.masked_word(), "--ss-ss-pp-");
    }

    #[test]
    fn masked_word_ignores_wrong_guesses() {
        let mut game = Game::new("cat").unwrap();
        play(&mut game, "xyz");
        assert_eq!(game.masked_word(), "---");
    }

    #[test]
    fn guesses_reported_in_order() {
        let mut game = Game::new("cat").unwrap();
        play(&mut game, "tzcb");
        let correct: String = game.correct_guesses().map(Letter::as_char).collect();
        let wrong: String = game.wrong_guesses().map(Letter::as_char).collect();
        assert_eq!(correct, "ct");
        assert_eq!(wrong, "bz");
    }

    #[test]
    fn status_display() {
        assert_eq!(GameStatus::InProgress.to_string(), "in progress");
        assert_eq!(GameStatus::Won.to_string(), "won");
        assert_eq!(GameStatus::Lost.to_string(), "lost");
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
    }
}
