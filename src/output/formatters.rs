//! Formatting utilities for terminal output

use crate::core::{Game, Letter, MAX_WRONG_GUESSES};

/// Gallows drawing after `wrong` wrong guesses
///
/// One body part per wrong guess; the seventh crosses out the face.
#[must_use]
pub fn gallows(wrong: usize) -> Vec<String> {
    let part = |stage: usize, drawn: &'static str| if wrong >= stage { drawn } else { " " };
    let head = if wrong >= MAX_WRONG_GUESSES {
        "X"
    } else {
        part(1, "O")
    };

    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {head}   |"),
        format!(" {}{}{}  |", part(3, "/"), part(2, "|"), part(4, "\\")),
        format!(" {} {}  |", part(5, "/"), part(6, "\\")),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

/// Masked word with a space between positions, e.g. `c - t`
#[must_use]
pub fn spaced(masked: &str) -> String {
    let mut result = String::with_capacity(masked.len() * 2);
    for (i, c) in masked.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// Letters as a comma separated list, or `none`
#[must_use]
pub fn letter_list(letters: impl Iterator<Item = Letter>) -> String {
    let list: Vec<String> = letters.map(|l| l.to_string()).collect();
    if list.is_empty() {
        "none".to_string()
    } else {
        list.join(", ")
    }
}

/// Create a lives bar string, one block per remaining wrong guess
#[must_use]
pub fn lives_bar(game: &Game) -> String {
    let remaining = game.remaining_wrong_guesses();
    format!(
        "{}{}",
        "█".repeat(remaining),
        "░".repeat(MAX_WRONG_GUESSES - remaining)
    )
}
