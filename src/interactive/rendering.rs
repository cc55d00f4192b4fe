//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::game::GameStatus;
use crate::output::{BoardSize, Cell, CellStyle, render};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Stats and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Terminal colours for a cell style
const fn cell_style(style: CellStyle) -> Style {
    match style {
        CellStyle::Positive => Style::new()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellStyle::Highlight => Style::new()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellStyle::Plain => Style::new().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORDLE")
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
    let rows = render(app.session.board(), BoardSize::for_session(&app.session));

    let mut lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&cell| {
                    let style = match cell {
                        Cell::Empty => Style::default().fg(Color::DarkGray),
                        Cell::Letter { .. } => cell_style(cell.style()),
                    };
                    let text = match cell {
                        Cell::Empty => "   ".to_string(),
                        Cell::Letter { letter, .. } => {
                            format!(" {} ", letter.to_uppercase())
                        }
                    };
                    [Span::styled(text, style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    if let Some(secret) = app.session.revealed_secret() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                secret.text().to_uppercase(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
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

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Statistics
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_statistics(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let max_count = stats.guess_distribution.iter().copied().max().unwrap_or(0);

    let mut lines = vec![Line::from(format!(
        "Played: {}  Won: {}  Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    ))];

    for guesses in 1..=app.config.max_attempts {
        let count = stats.guess_distribution.get(guesses).copied().unwrap_or(0);
        let width = if max_count == 0 {
            0
        } else {
            count * 20 / max_count
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses}: ")),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
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
    let (title, color) = match app.session.status() {
        GameStatus::Won => (" 🎉 SOLVED! | 'n' new game, 'q' quit ", Color::Green),
        GameStatus::Lost => (" Game over | 'n' new game, 'q' quit ", Color::Red),
        GameStatus::InProgress => (" Your guess | Enter to submit ", Color::Yellow),
    };

    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
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
    let status = format!(
        "Attempt {}/{} | {} words | Esc: Quit | Ctrl+N: New Game",
        app.session.attempts(),
        app.session.max_attempts(),
        app.library.len()
    );

    let help = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
