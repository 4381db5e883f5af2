//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Game, GameStatus, Letter, MAX_WRONG_GUESSES};
use crate::output::formatters::{gallows, spaced};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input hint
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Gallows and word
            Constraint::Percentage(45), // Letters and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Gallows ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(game) = app.game.as_ref() else {
        let paragraph = Paragraph::new("No game in progress").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut lines: Vec<Line> = gallows(game.wrong_guess_count())
        .into_iter()
        .map(Line::from)
        .collect();

    lines.push(Line::from(""));

    // Reveal the whole word once the round is over
    let (word, word_style) = if game.status().is_terminal() {
        let color = if game.status() == GameStatus::Won {
            Color::Green
        } else {
            Color::Red
        };
        (spaced(game.secret_word().text()), Style::default().fg(color))
    } else {
        (spaced(&game.masked_word()), Style::default().fg(Color::Yellow))
    };

    lines.push(Line::from(Span::styled(
        word.to_uppercase(),
        word_style.add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Alphabet
            Constraint::Length(3), // Lives gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_letters(f, app.game.as_ref(), chunks[0]);
    render_lives(f, app.game.as_ref(), chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn letter_span(game: Option<&Game>, letter: Letter) -> Span<'static> {
    let text = format!("{} ", letter.as_char().to_ascii_uppercase());
    let style = match game {
        Some(game) if game.has_guessed(letter) && game.secret_word().contains(letter) => {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        }
        Some(game) if game.has_guessed(letter) => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::CROSSED_OUT),
        _ => Style::default().fg(Color::White),
    };
    Span::styled(text, style)
}

fn render_letters(f: &mut Frame, game: Option<&Game>, area: Rect) {
    let letters: Vec<Letter> = Letter::all().collect();
    let lines: Vec<Line> = letters
        .chunks(13)
        .map(|row| Line::from(row.iter().map(|&l| letter_span(game, l)).collect::<Vec<_>>()))
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_lives(f: &mut Frame, game: Option<&Game>, area: Rect) {
    let remaining = game.map_or(MAX_WRONG_GUESSES, Game::remaining_wrong_guesses);
    let percent = (remaining * 100 / MAX_WRONG_GUESSES) as u16;

    let color = match remaining {
        0..=2 => Color::Red,
        3..=4 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{MAX_WRONG_GUESSES} misses left"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guessing => (" Type a letter to guess ", Color::Yellow),
        InputMode::RoundOver => (" Press 'n' for new game or 'q' to quit ", Color::Green),
    };

    let input = Paragraph::new("")
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate() * 100.0
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let guesses_text = app.game.as_ref().map_or_else(
        || "Guesses: 0".to_string(),
        |game| format!("Guesses: {}", game.guess_count()),
    );
    let guesses = Paragraph::new(guesses_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[1]);

    let help = Paragraph::new("Esc: Quit | a-z: Guess")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
