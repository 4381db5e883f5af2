//! Secret word representation
//!
//! A `SecretWord` stores the lowercase word along with its set of distinct
//! letters so membership checks stay O(1) per guess.

use super::{InputError, Letter};
use rustc_hash::FxHashSet;
use std::fmt;

/// The validated word a player is trying to guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: FxHashSet<Letter>,
}

impl SecretWord {
    /// Create a new secret word, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `InputError` if:
    /// - The word is empty
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Glorp").unwrap();
    /// assert_eq!(word.text(), "glorp");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, InputError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(InputError::MissingWord);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(InputError::WordNotAlphabetic(bad));
        }

        let text = text.to_ascii_lowercase();
        let letters = text
            .bytes()
            .map(|b| Letter::from_char(b as char))
            .collect::<Result<FxHashSet<_>, _>>()?;

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a secret word has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letters.len()
    }

    /// Iterate over the distinct letters, in no particular order
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.letters.iter().copied()
    }

    /// Iterate over the letters of the word in order, repeats included
    pub fn chars(&self) -> impl Iterator<Item = Letter> + '_ {
        // Validated ASCII letters, so every byte converts
        self.text.bytes().filter_map(|b| Letter::from_char(b as char).ok())
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
