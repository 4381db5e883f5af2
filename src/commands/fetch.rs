//! Word fetching with progress feedback

use crate::wordsource::{WordSource, WordSourceError};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Fetch one word, showing a spinner while the request is in flight
///
/// # Errors
///
/// Returns the source's error unchanged.
pub fn fetch_with_spinner<S: WordSource + ?Sized>(
    source: &S,
    show_spinner: bool,
) -> Result<String, WordSourceError> {
    let spinner = if show_spinner {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Fetching a secret word...");
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    } else {
        ProgressBar::hidden()
    };

    let result = source.fetch_random_word();
    spinner.finish_and_clear();

    if let Err(ref e) = result {
        tracing::warn!(error = %e, "Could not fetch a word");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordsource::{FixedWord, ListWordSource};

    #[test]
    fn returns_fetched_word() {
        let word = fetch_with_spinner(&FixedWord::new("zephyr"), false).unwrap();
        assert_eq!(word, "zephyr");
    }

    #[test]
    fn passes_errors_through() {
        let result = fetch_with_spinner(&ListWordSource::new(Vec::new()), false);
        assert!(matches!(result, Err(WordSourceError::EmptyList)));
    }
}
