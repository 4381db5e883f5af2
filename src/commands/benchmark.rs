//! Benchmark command
//!
//! Tests solver performance across many words, in parallel.

use crate::core::{Game, GameStatus, SecretWord};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub won: usize,
    pub lost: usize,
    pub average_wrong_guesses: f64,
    /// Wrong-guess count -> number of games that ended with it
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    /// Fraction of games won, 0.0 for an empty run
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.won as f64 / self.total_words as f64
        }
    }
}

/// Run benchmark on a set of target words
///
/// Each target is an independent game; games run on the rayon pool.
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    target_words: &[SecretWord],
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(target_words.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes: Vec<(GameStatus, usize)> = target_words
        .par_iter()
        .map(|target| {
            let outcome = play_out(solver, target);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut won = 0;
    let mut total_wrong = 0;
    for &(status, wrong) in &outcomes {
        if status == GameStatus::Won {
            won += 1;
        }
        total_wrong += wrong;
        *distribution.entry(wrong).or_insert(0) += 1;
    }

    let total_words = outcomes.len();
    let (average_wrong_guesses, words_per_second) = if total_words == 0 {
        (0.0, 0.0)
    } else {
        (
            total_wrong as f64 / total_words as f64,
            total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
        )
    };

    tracing::info!(total_words, won, elapsed = ?duration, "Benchmark finished");

    BenchmarkResult {
        total_words,
        won,
        lost: total_words - won,
        average_wrong_guesses,
        distribution,
        duration,
        words_per_second,
    }
}

/// Play one full game; returns the final status and wrong-guess count
fn play_out<S: Strategy>(solver: &Solver<S>, target: &SecretWord) -> (GameStatus, usize) {
    let mut game = Game::with_secret(target.clone());

    while let Some(letter) = solver.next_guess(&game) {
        match game.guess_letter(letter) {
            Ok(true) => {}
            Ok(false) | Err(_) => break,
        }
    }

    (game.status(), game.wrong_guess_count())
}
