//! Letter frequency counting
//!
//! Counts, for every letter, how many candidate words contain it at least once.

use crate::core::{Letter, SecretWord};
use rayon::prelude::*;

/// English letters from most to least common in running text
pub const ENGLISH_FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// Number of candidates containing each letter, indexed by [`Letter::index`]
///
/// A word with a repeated letter counts once for that letter.
///
/// # Examples
/// ```
/// use hangman::core::{Letter, SecretWord};
/// use hangman::solver::letter_counts;
///
/// let words = [SecretWord::new("cat").unwrap(), SecretWord::new("cot").unwrap()];
/// let refs: Vec<&SecretWord> = words.iter().collect();
///
/// let counts = letter_counts(&refs);
/// assert_eq!(counts[Letter::parse("t").unwrap().index()], 2);
/// assert_eq!(counts[Letter::parse("a").unwrap().index()], 1);
/// ```
#[must_use]
pub fn letter_counts(candidates: &[&SecretWord]) -> [usize; 26] {
    candidates
        .par_iter()
        .fold(
            || [0usize; 26],
            |mut counts, word| {
                for letter in word.letters() {
                    counts[letter.index()] += 1;
                }
                counts
            },
        )
        .reduce(
            || [0usize; 26],
            |mut left, right| {
                for (total, count) in left.iter_mut().zip(right) {
                    *total += count;
                }
                left
            },
        )
}

/// Letters in [`ENGLISH_FREQUENCY_ORDER`]
pub fn english_order() -> impl Iterator<Item = Letter> {
    ENGLISH_FREQUENCY_ORDER
        .chars()
        .filter_map(|c| Letter::from_char(c).ok())
}
