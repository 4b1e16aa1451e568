//! TUI rendering with ratatui
//!
//! Draws the letter grid, the tinted on-screen keyboard, messages and status.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{CellFeedback, GameEngine, KEYBOARD_ROWS, Key};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let grid_height = u16::try_from(app.game.rows()).unwrap_or(u16::MAX).saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(grid_height), // Grid
            Constraint::Length(5),           // Keyboard
            Constraint::Min(4),              // Messages
            Constraint::Length(1),           // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, &app.game, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, area);
}

/// Background colour for a feedback class
fn feedback_style(feedback: Option<CellFeedback>) -> Style {
    let style = match feedback {
        Some(CellFeedback::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(CellFeedback::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(CellFeedback::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::Gray),
    };
    style.add_modifier(Modifier::BOLD)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let (cursor_row, cursor_col) = game.cursor();
    let playing = app.input_mode == InputMode::Playing;

    let lines: Vec<Line> = game
        .grid()
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let spans: Vec<Span> = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let letter = cell.map_or('·', |c| char::from(c).to_ascii_uppercase());
                    let feedback = game.cell_feedback_at(row, col).ok().flatten();
                    let mut style = feedback_style(feedback);
                    if playing && row == cursor_row && col == cursor_col {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!(" {letter} "), style)
                })
                .flat_map(|tile| [tile, Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Guess {}/{} ", game.attempts_used(), game.rows()))
            .borders(Borders::ALL),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, game: &GameEngine, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .filter_map(|label| Key::from_label(label))
                .map(|key| match key {
                    Key::Letter(letter) => Span::styled(
                        format!(" {} ", char::from(letter).to_ascii_uppercase()),
                        feedback_style(game.key_feedback_for(letter)),
                    ),
                    Key::Submit => Span::styled(" ⏎ ", Style::default().fg(Color::Gray)),
                    Key::Clear => Span::styled(" ⌫ ", Style::default().fg(Color::Gray)),
                })
                .flat_map(|key| [key, Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = match app.input_mode {
        InputMode::Playing => "Enter: Submit | Bksp: Clear | Esc: Quit",
        InputMode::GameOver => "s: Share | n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
