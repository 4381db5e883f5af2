//! A single guessable letter

use super::InputError;
use std::fmt;

/// One ASCII letter, stored lowercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Parse exactly one ASCII letter, folding case
    ///
    /// # Errors
    /// Returns `InputError` if the input is empty, longer than one character,
    /// or not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// let letter = Letter::parse("G").unwrap();
    /// assert_eq!(letter.as_char(), 'g');
    ///
    /// assert!(Letter::parse("ab").is_err());
    /// assert!(Letter::parse("1").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let mut chars = input.chars();
        let Some(first) = chars.next() else {
            return Err(InputError::EmptyGuess);
        };

        let rest = chars.count();
        if rest > 0 {
            return Err(InputError::NotSingleLetter(rest + 1));
        }

        Self::from_char(first)
    }

    /// Convert a single character
    ///
    /// # Errors
    /// Returns `InputError::NotAlphabetic` for anything outside a-z / A-Z.
    pub fn from_char(c: char) -> Result<Self, InputError> {
        if c.is_ascii_alphabetic() {
            // ASCII guaranteed, so the byte cast is lossless
            Ok(Self(c.to_ascii_lowercase() as u8))
        } else {
            Err(InputError::NotAlphabetic(c))
        }
    }

    /// The letter at `index` in the alphabet (0 = 'a')
    ///
    /// Returns `None` for indices past 'z'.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 26 {
            Some(Self(b'a' + index as u8))
        } else {
            None
        }
    }

    /// All 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }

    /// Position in the alphabet (0 = 'a')
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c)
    }
}
