//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::SecretWord;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid secret words, skipping blank lines, `#` comments
/// and any entry that is not purely alphabetic.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordsource::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<SecretWord>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse newline-separated words
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<SecretWord> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                SecretWord::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to a word vector
///
/// # Examples
/// ```
/// use hangman::wordsource::loader::words_from_slice;
/// use hangman::wordsource::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice
        .iter()
        .filter_map(|&s| SecretWord::new(s).ok())
        .collect()
}
