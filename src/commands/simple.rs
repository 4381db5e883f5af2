//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::commands::fetch_with_spinner;
use crate::core::{Game, GameError, GameStatus};
use crate::output::{write_game_state, write_round_over};
use crate::wordsource::WordSource;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Write};

/// Rounds played in one session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub games_won: usize,
    pub games_lost: usize,
}

impl SessionStats {
    #[must_use]
    pub const fn total_games(&self) -> usize {
        self.games_won + self.games_lost
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error or the word source fails.
pub fn run_simple<S: WordSource + ?Sized>(source: &S) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let spinner = stdout.is_terminal();

    let stats = play_session(source, stdin.lock(), stdout.lock(), spinner)?;
    tracing::info!(
        won = stats.games_won,
        lost = stats.games_lost,
        "Session finished"
    );
    Ok(())
}

/// Play rounds until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading, writing or fetching a word fails.
pub fn play_session<S, R, W>(
    source: &S,
    mut input: R,
    mut out: W,
    show_spinner: bool,
) -> Result<SessionStats>
where
    S: WordSource + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                     Hangman - Simple Mode                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the word one letter at a time. Seven misses and you hang!")?;
    writeln!(out, "Commands: 'quit' to exit\n")?;

    let mut stats = SessionStats::default();

    loop {
        let word = fetch_with_spinner(source, show_spinner)
            .context("could not fetch a secret word (try --source embedded)")?;
        let mut game = Game::new(&word).context("word source returned an unusable word")?;

        while !game.status().is_terminal() {
            write_game_state(&mut out, &game)?;

            let Some(line) = prompt(&mut input, &mut out, "Guess a letter")? else {
                return Ok(stats);
            };

            if matches!(line.to_lowercase().as_str(), "quit" | "exit") {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(stats);
            }

            match game.guess(&line) {
                Ok(true) => {
                    tracing::debug!(masked = %game.masked_word(), "Guess recorded");
                }
                Ok(false) => {
                    writeln!(
                        out,
                        "{}",
                        format!("You already guessed '{}'", line.to_lowercase()).yellow()
                    )?;
                }
                Err(GameError::InvalidArgument(e)) => {
                    writeln!(out, "{}", format!("❌ {e}").red())?;
                }
                Err(e @ GameError::GameOver(_)) => return Err(e.into()),
            }
        }

        write_game_state(&mut out, &game)?;
        write_round_over(&mut out, &game)?;
        if game.status() == GameStatus::Won {
            stats.games_won += 1;
        } else {
            stats.games_lost += 1;
        }

        writeln!(
            out,
            "\nWon {} of {} games",
            stats.games_won,
            stats.total_games()
        )?;

        match prompt(&mut input, &mut out, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            _ => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(stats);
            }
        }
    }
}

/// Read one trimmed line, or `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
