//! Coloured terminal output for the line-based front end

use super::board::{BoardRow, BoardSize, Cell, CellStyle, render};
use crate::core::Word;
use crate::game::GameSession;
use colored::{ColoredString, Colorize};

/// Apply terminal colours to a cell
#[must_use]
pub fn paint(cell: Cell) -> ColoredString {
    let text = cell.to_string();
    match cell.style() {
        CellStyle::Positive => text.green().bold(),
        CellStyle::Highlight => text.yellow().bold(),
        CellStyle::Plain => text.normal(),
    }
}

/// Colour rendered rows, one line per row with a trailing newline each
#[must_use]
pub fn format_rows(rows: &[BoardRow]) -> String {
    rows.iter().fold(String::new(), |mut acc, row| {
        for &cell in row {
            acc.push_str(&paint(cell).to_string());
        }
        acc.push('\n');
        acc
    })
}

/// Render and colour the full board of a session
#[must_use]
pub fn format_board(session: &GameSession<'_>) -> String {
    format_rows(&render(session.board(), BoardSize::for_session(session)))
}

/// Show a word as a row of all-green cells
#[must_use]
pub fn format_secret(secret: &Word) -> String {
    secret
        .letters()
        .iter()
        .map(|letter| format!("[{letter}]").green().bold().to_string())
        .collect()
}
