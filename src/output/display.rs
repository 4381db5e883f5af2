//! Display functions for games and command results

use super::formatters::{gallows, letter_list, lives_bar, spaced};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{Game, GameStatus, MAX_WRONG_GUESSES};
use colored::Colorize;
use std::io::{self, Write};

/// Write the gallows, masked word and guessed letters
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_game_state<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out)?;
    for line in gallows(game.wrong_guess_count()) {
        writeln!(out, "  {}", line.bright_black())?;
    }

    writeln!(
        out,
        "\n  Word:    {}",
        spaced(&game.masked_word()).bright_white().bold()
    )?;
    writeln!(
        out,
        "  Misses:  {}",
        letter_list(game.wrong_guesses()).red()
    )?;
    writeln!(
        out,
        "  Lives:   {} {}/{}",
        lives_bar(game).green(),
        game.remaining_wrong_guesses(),
        MAX_WRONG_GUESSES
    )?;
    writeln!(out)
}

/// Write the end-of-round banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_round_over<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    let word = game.secret_word().text().to_uppercase();
    match game.status() {
        GameStatus::Won => writeln!(
            out,
            "{}",
            format!(
                "🎉 You got it! The word was {word} ({} misses)",
                game.wrong_guess_count()
            )
            .green()
            .bold()
        ),
        GameStatus::Lost => writeln!(
            out,
            "{}",
            format!("💀 Out of guesses! The word was {word}").red().bold()
        ),
        GameStatus::InProgress => Ok(()),
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let mark = if step.correct {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            step.letter.to_string().to_uppercase().bold(),
            mark,
            spaced(&step.masked)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    match result.status {
        GameStatus::Won => println!(
            "{}",
            format!(
                "✅ Solved with {} misses in {} guesses!",
                result.wrong_guesses,
                result.steps.len()
            )
            .green()
            .bold()
        ),
        _ => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Lost:             {}", format!("{}", result.lost).red());
    println!(
        "   Average misses:   {}",
        format!("{:.2}", result.average_wrong_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Misses per game:".bright_cyan().bold());
    for misses in 0..=MAX_WRONG_GUESSES {
        if let Some(&count) = result.distribution.get(&misses) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {misses}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
