//! TUI application state and logic

use crate::core::{Game, GameError, GameStatus, Letter};
use crate::wordsource::{StartError, WordSource, start_game};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub source: &'a dyn WordSource,
    /// `None` until a word has been fetched successfully
    pub game: Option<Game>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Letter keys are guesses
    Guessing,
    /// Round finished (or no word could be fetched); waiting for new game
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = wrong guesses in a won game
    pub miss_distribution: [usize; 7],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(source: &'a dyn WordSource) -> Self {
        Self {
            source,
            game: None,
            messages: vec![Message {
                text: "Welcome! Type letters to guess. Esc quits.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::RoundOver,
        }
    }

    /// Fetch a word and start a fresh round
    pub fn new_game(&mut self) {
        match start_game(self.source) {
            Ok(game) => {
                self.add_message(
                    &format!("New game! {} letters to find.", game.secret_word().len()),
                    MessageStyle::Info,
                );
                self.game = Some(game);
                self.input_mode = InputMode::Guessing;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Could not start game");
                let text = match err {
                    StartError::Source(e) => format!("Could not fetch a word: {e}"),
                    StartError::Game(e) => format!("Unusable word from source: {e}"),
                };
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press 'n' to try again.", MessageStyle::Info);
                self.game = None;
                self.input_mode = InputMode::RoundOver;
            }
        }
    }

    /// Submit one typed character as a guess
    pub fn handle_guess(&mut self, c: char) {
        if self.game.is_none() {
            return;
        }

        let letter = match Letter::from_char(c) {
            Ok(letter) => letter,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let Some(game) = self.game.as_mut() else {
            return;
        };

        match game.guess_letter(letter) {
            Ok(true) => {
                let hit = game.secret_word().contains(letter);
                let status = game.status();
                let misses = game.wrong_guess_count();
                let word = game.secret_word().text().to_uppercase();

                if hit {
                    self.add_message(&format!("'{letter}' is in the word"), MessageStyle::Success);
                } else {
                    self.add_message(&format!("No '{letter}'"), MessageStyle::Error);
                }

                if status.is_terminal() {
                    self.finish_round(status, misses, &word);
                }
            }
            Ok(false) => {
                self.add_message(&format!("Already guessed '{letter}'"), MessageStyle::Info);
            }
            Err(GameError::GameOver(_)) => {
                self.input_mode = InputMode::RoundOver;
            }
            Err(GameError::InvalidArgument(e)) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_round(&mut self, status: GameStatus, misses: usize, word: &str) {
        self.stats.total_games += 1;
        if status == GameStatus::Won {
            self.stats.games_won += 1;
            if let Some(slot) = self.stats.miss_distribution.get_mut(misses) {
                *slot += 1;
            }
            self.add_message(
                &format!("🎉 Solved! The word was {word}"),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("💀 Hanged! The word was {word}"),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        self.input_mode = InputMode::RoundOver;
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Guessing => {
                if let KeyCode::Char(c) = key.code {
                    self.handle_guess(c);
                }
            }
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordsource::{FixedWord, ListWordSource};

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    #[test]
    fn new_game_starts_guessing() {
        let source = FixedWord::new("cat");
        let mut app = App::new(&source);
        app.new_game();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.as_ref().unwrap().masked_word(), "---");
    }

    #[test]
    fn letters_are_guesses() {
        let source = FixedWord::new("cat");
        let mut app = App::new(&source);
        app.new_game();

        press(&mut app, 'C');
        press(&mut app, 'z');
        let game = app.game.as_ref().unwrap();
        assert_eq!(game.masked_word(), "c--");
        assert_eq!(game.wrong_guess_count(), 1);
    }

    #[test]
    fn win_updates_stats_and_waits() {
        let source = FixedWord::new("cat");
        let mut app = App::new(&source);
        app.new_game();

        for c in ['c', 'a', 't'] {
            press(&mut app, c);
        }
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.miss_distribution[0], 1);
        assert!(app.messages.iter().any(|m| m.text.contains("CAT")));

        // Letters no longer count as guesses
        press(&mut app, 'z');
        assert_eq!(app.game.as_ref().unwrap().wrong_guess_count(), 0);
    }

    #[test]
    fn loss_counts_game() {
        let source = FixedWord::new("cat");
        let mut app = App::new(&source);
        app.new_game();

        for c in ['b', 'd', 'e', 'f', 'g', 'h', 'i'] {
            press(&mut app, c);
        }
        assert_eq!(app.game.as_ref().unwrap().status(), GameStatus::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.input_mode, InputMode::RoundOver);
    }

    #[test]
    fn n_starts_next_round() {
        let source = FixedWord::new("a");
        let mut app = App::new(&source);
        app.new_game();
        press(&mut app, 'a');
        assert_eq!(app.input_mode, InputMode::RoundOver);

        press(&mut app, 'n');
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.as_ref().unwrap().guess_count(), 0);
    }

    #[test]
    fn non_letters_are_reported() {
        let source = FixedWord::new("cat");
        let mut app = App::new(&source);
        app.new_game();

        press(&mut app, '7');
        assert_eq!(app.game.as_ref().unwrap().guess_count(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn fetch_failure_stays_in_round_over() {
        let source = ListWordSource::new(Vec::new());
        let mut app = App::new(&source);
        app.new_game();

        assert!(app.game.is_none());
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert!(app.messages.iter().any(|m| m.style == MessageStyle::Error));
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let source = FixedWord::new("cat");
        let mut app = App::new(&source);
        app.new_game();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = App::new(&source);
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let source = FixedWord::new("cat");
        let mut app = App::new(&source);
        for i in 0..10 {
            app.add_message(&format!("{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "9");
    }
}
