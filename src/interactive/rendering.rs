//! TUI rendering with ratatui
//!
//! Draws the guess grid, the transient message line and the on-screen
//! keypad, recording keypad hit-boxes on the way for mouse input.

use super::app::{App, KEYPAD_ROWS, KeypadKey};
use crate::core::{LetterScore, MAX_GUESSES, WORD_LEN};
use crate::ports::DictionaryValidator;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui<V: DictionaryValidator>(f: &mut Frame, app: &mut App<V>) {
    #[allow(clippy::cast_possible_truncation)]
    let grid_height = MAX_GUESSES as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(grid_height), // Guess grid
            Constraint::Length(3),           // Message line
            Constraint::Length(5),           // Keypad
            Constraint::Min(1),              // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
    render_keypad(f, app, chunks[3]);
    render_help(f, app, chunks[4]);
}

fn score_style(score: LetterScore) -> Style {
    match score {
        LetterScore::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterScore::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterScore::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R L D L E")
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

fn render_grid<V: DictionaryValidator>(f: &mut Frame, app: &App<V>, area: Rect) {
    let grid = app.engine.grid();
    let mut lines = Vec::with_capacity(MAX_GUESSES);

    for row in 0..MAX_GUESSES {
        let feedback = app.engine.feedback_for(row);
        let shaking = app.shaking.is_some_and(|(r, _)| r == row);
        let mut spans = Vec::with_capacity(WORD_LEN * 2);

        for col in 0..WORD_LEN {
            let letter = grid.cell(row, col).unwrap_or(' ');
            let style = match feedback {
                Some(fb) => score_style(fb.scores()[col]),
                None if shaking => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
                None if letter != ' ' => Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                None => Style::default().fg(Color::DarkGray),
            };
            let shown = if letter == ' ' { '·' } else { letter };
            spans.push(Span::styled(format!(" {shown} "), style));
            if col + 1 < WORD_LEN {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_message<V: DictionaryValidator>(f: &mut Frame, app: &App<V>, area: Rect) {
    let (text, color) = match &app.message {
        Some(message) => (message.text.clone(), Color::Yellow),
        None if app.engine.is_over() => ("Press 'q' or Esc to quit".to_string(), Color::DarkGray),
        None => (String::new(), Color::White),
    };

    let message = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn render_keypad<V: DictionaryValidator>(f: &mut Frame, app: &mut App<V>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    app.key_rects.clear();

    for (row_index, row) in KEYPAD_ROWS.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let y = inner.y + row_index as u16;
        if y >= inner.y + inner.height {
            break;
        }

        // Key width is label + padding; one column gap between keys
        let widths: Vec<u16> = row
            .iter()
            .map(|key| {
                #[allow(clippy::cast_possible_truncation)]
                let w = key.label().len() as u16 + 2;
                w
            })
            .collect();
        #[allow(clippy::cast_possible_truncation)]
        let total: u16 = widths.iter().sum::<u16>() + row.len() as u16 - 1;
        let mut x = inner.x + inner.width.saturating_sub(total) / 2;

        for (key, width) in row.iter().zip(widths) {
            let rect = Rect {
                x,
                y,
                width,
                height: 1,
            };
            let style = key_style(app, *key);
            let label = Paragraph::new(key.label())
                .style(style)
                .alignment(Alignment::Center);
            f.render_widget(label, rect);
            app.key_rects.push((rect, *key));
            x += width + 1;
        }
    }
}

fn key_style<V: DictionaryValidator>(app: &App<V>, key: KeypadKey) -> Style {
    match key {
        KeypadKey::Letter(c) => match app.engine.key_hint(c) {
            Some(score) => score_style(score),
            None => Style::default().fg(Color::White).bg(Color::Black),
        },
        KeypadKey::Go | KeypadKey::Del => Style::default()
            .fg(Color::Cyan)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD),
    }
}

fn render_help<V: DictionaryValidator>(f: &mut Frame, app: &App<V>, area: Rect) {
    let help_text = if app.engine.is_over() {
        "q / Esc: Quit"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Esc: Quit | Click the keypad"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
