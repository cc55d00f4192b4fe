//! Board rendering
//!
//! Turns a board into a fixed grid of cells. Colours are not decided here:
//! each played cell carries its feedback, and `style_for` maps feedback to an
//! abstract style that front ends translate into terminal colours.

use crate::core::LetterFeedback;
use crate::game::{Board, GameSession};
use std::fmt;

/// Grid dimensions: one row per attempt, one column per letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    pub rows: usize,
    pub cols: usize,
}

impl BoardSize {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Full grid for a session: `max_attempts` × word length
    #[must_use]
    pub const fn for_session(session: &GameSession<'_>) -> Self {
        Self {
            rows: session.max_attempts(),
            cols: session.word_length(),
        }
    }
}

/// Abstract presentation style of a played cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStyle {
    /// Right letter, right place
    Positive,
    /// Letter present elsewhere
    Highlight,
    /// No styling
    Plain,
}

/// Map feedback to its presentation style
#[must_use]
pub const fn style_for(feedback: LetterFeedback) -> CellStyle {
    match feedback {
        LetterFeedback::Correct => CellStyle::Positive,
        LetterFeedback::Present => CellStyle::Highlight,
        LetterFeedback::Absent => CellStyle::Plain,
    }
}

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Letter {
        letter: char,
        feedback: LetterFeedback,
    },
}

impl Cell {
    /// Style of the cell; empty cells are plain
    #[must_use]
    pub const fn style(self) -> CellStyle {
        match self {
            Self::Empty => CellStyle::Plain,
            Self::Letter { feedback, .. } => style_for(feedback),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "[ ]"),
            Self::Letter { letter, .. } => write!(f, "[{letter}]"),
        }
    }
}

/// One rendered row of the grid
pub type BoardRow = Vec<Cell>;

/// Render the board into `size.rows` rows of `size.cols` cells
///
/// Played rows come first in chronological order; the rest are empty.
/// Rows beyond `size.rows` and letters beyond `size.cols` are cut off.
#[must_use]
pub fn render(board: &Board, size: BoardSize) -> Vec<BoardRow> {
    (0..size.rows)
        .map(|row| match board.rows().get(row) {
            Some(result) => {
                let mut cells: BoardRow = result
                    .cells()
                    .take(size.cols)
                    .map(|(letter, feedback)| Cell::Letter { letter, feedback })
                    .collect();
                cells.resize(size.cols, Cell::Empty);
                cells
            }
            None => vec![Cell::Empty; size.cols],
        })
        .collect()
}

/// Render the board as plain text rows like `[c][r][a][ ][ ]`
#[must_use]
pub fn render_text(board: &Board, size: BoardSize) -> Vec<String> {
    render(board, size)
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect()
}
