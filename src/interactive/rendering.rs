//! TUI rendering with ratatui
//!
//! Board, knowledge keyboard, and status visualizations for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{CharClass, CharStatus, EQUATION_LEN};
use crate::engine::MAX_ATTEMPTS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Knowledge + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 NUMBERLE - Guess the Equation")
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

/// The 6×7 guess board: past attempts colored, then the input row, then
/// empty rows
fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    for attempt in app.game.attempts() {
        lines.push(attempt_line(attempt.guess(), attempt.statuses()));
        lines.push(Line::from(""));
    }

    if app.input_mode == InputMode::Guessing && app.game.attempts().len() < MAX_ATTEMPTS {
        lines.push(input_line(&app.input_buffer));
        lines.push(Line::from(""));
    }

    let used = app.game.attempts().len()
        + usize::from(app.input_mode == InputMode::Guessing);
    for _ in used..MAX_ATTEMPTS {
        lines.push(empty_line());
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn attempt_line<'a>(guess: &'a str, statuses: &[CharStatus]) -> Line<'a> {
    let spans: Vec<Span> = guess
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let style = match statuses.get(i) {
                Some(CharStatus::Exact) => Style::default()
                    .bg(Color::Green)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                Some(CharStatus::WrongPosition) => Style::default()
                    .bg(Color::Yellow)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                Some(CharStatus::Absent) => Style::default().bg(Color::DarkGray).fg(Color::White),
                None => Style::default().fg(Color::DarkGray),
            };
            Span::styled(format!(" {ch} "), style)
        })
        .collect();
    Line::from(spans)
}

fn input_line(buffer: &str) -> Line<'_> {
    let mut spans: Vec<Span> = buffer
        .chars()
        .map(|ch| {
            Span::styled(
                format!(" {ch} "),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    for _ in buffer.chars().count()..EQUATION_LEN {
        spans.push(Span::styled(" _ ", Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

fn empty_line() -> Line<'static> {
    let spans: Vec<Span> = (0..EQUATION_LEN)
        .map(|_| Span::styled(" · ", Style::default().fg(Color::DarkGray)))
        .collect();
    Line::from(spans)
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Knowledge keyboard
            Constraint::Min(5),    // Messages
            Constraint::Length(6), // Statistics
        ])
        .split(area);

    render_knowledge(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
}

/// Keyboard-style panel: every alphabet character colored by its class
fn render_knowledge(f: &mut Frame, app: &App, area: Rect) {
    let knowledge = app.game.knowledge();
    let key_row = |chars: &str| -> Line {
        let spans: Vec<Span> = chars
            .chars()
            .map(|ch| {
                let style = match knowledge.class_of(ch) {
                    CharClass::Exact => Style::default()
                        .bg(Color::Green)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                    CharClass::WrongPosition => Style::default()
                        .bg(Color::Yellow)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                    CharClass::Absent => Style::default().bg(Color::DarkGray).fg(Color::White),
                    CharClass::Unseen => Style::default().fg(Color::White),
                };
                Span::styled(format!(" {ch} "), style)
            })
            .collect();
        Line::from(spans)
    };

    let content = vec![
        Line::from(""),
        key_row("0123456789"),
        Line::from(""),
        key_row("+-*/="),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Characters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .messages
        .iter()
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(message.text.clone(), style))
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Messages ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let win_rate = if stats.total_games == 0 {
        0.0
    } else {
        (stats.games_won as f64 / stats.total_games as f64) * 100.0
    };

    let distribution: String = (1..=MAX_ATTEMPTS)
        .map(|i| format!("{}:{} ", i, stats.guess_distribution[i]))
        .collect();

    let content = vec![
        Line::from(format!(
            "Games: {}   Won: {}   Rate: {win_rate:.0}%",
            stats.total_games, stats.games_won
        )),
        Line::from(format!("Wins by guess count: {}", distribution.trim_end())),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.game.remaining_attempts();
    let status = match app.input_mode {
        InputMode::Guessing => format!(
            "Attempts left: {remaining}  |  Enter: submit  |  n: new game  |  q: quit"
        ),
        InputMode::GameOver => "Round over  |  n: new game  |  q: quit".to_string(),
    };

    let paragraph = Paragraph::new(status)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}
